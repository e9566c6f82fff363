// Domain layer: modeling primitives and the solver contract
pub mod domain;

// Application layer: constraint templates, objective composition, reporting
pub mod application;

// Solver adapters: concrete implementations of SolverService
pub mod solver;

// Bundled problem instances (configuration only)
pub mod instances;

// Re-export commonly used types
pub use domain::{
    Constraint, LinearExpr, Model, ModelError, Objective, RelOp, Scenario, ScenarioSet, Sense,
    SolveResult, SolveStatus, SolverBackend, SolverError, SolverService, VarDomain, VarId,
    Variable, VariableRegistry,
};

pub use solver::{MicrolpSolver, SolverFactory};

#[cfg(feature = "cbc")]
pub use solver::CoinCbcSolver;
#[cfg(feature = "highs")]
pub use solver::HighsSolver;
