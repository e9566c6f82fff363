// Domain module: modeling primitives and solver contract

pub mod expr;
pub mod model;
pub mod scenario;
pub mod solver_service;
pub mod value_objects;

pub use expr::*;
pub use model::*;
pub use scenario::*;
pub use solver_service::*;
pub use value_objects::*;
