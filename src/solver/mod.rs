// Solver adapters: concrete implementations of SolverService

pub mod factory;
pub mod microlp_solver;

#[cfg(feature = "cbc")]
pub mod coin_cbc_solver;
#[cfg(feature = "highs")]
pub mod highs_solver;

pub use factory::SolverFactory;
pub use microlp_solver::MicrolpSolver;

#[cfg(feature = "cbc")]
pub use coin_cbc_solver::CoinCbcSolver;
#[cfg(feature = "highs")]
pub use highs_solver::HighsSolver;
