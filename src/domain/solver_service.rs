// Domain service interface for solving models
// Defines the contract every solver backend adapter must follow

use super::model::{Model, SolveResult};

/// Errors raised by the solve orchestration itself
///
/// Terminal solve outcomes (infeasible, unbounded, abnormal, unknown) are
/// NOT errors; they come back as [`SolveResult`] data for the caller to
/// branch on.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The requested backend is not compiled in or cannot be acquired.
    /// Fatal; never retried.
    #[error("solver backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("invalid model: {0}")]
    InvalidModel(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Contract every solver backend implements
///
/// Translation into the backend is a pure, lossless mapping; the terminal
/// solve call is invoked exactly once per model and blocks until the backend
/// returns a status.
pub trait SolverService {
    /// Solve a model and map the backend status into a [`SolveResult`]
    fn solve(&self, model: &Model) -> Result<SolveResult>;

    /// Validate a model without solving it
    fn validate(&self, model: &Model) -> Result<()> {
        if model.objective().is_none() {
            return Err(SolverError::InvalidModel(format!(
                "model '{}' has no objective",
                model.name
            )));
        }
        if model.num_variables() == 0 {
            return Err(SolverError::InvalidModel(format!(
                "model '{}' has no variables",
                model.name
            )));
        }
        if model.has_integer_variables() && !self.supports_mip() {
            return Err(SolverError::InvalidModel(format!(
                "model '{}' has integer variables but backend {} does not support MIP",
                model.name,
                self.name()
            )));
        }
        Ok(())
    }

    /// Name of this solver backend
    fn name(&self) -> &str;

    /// Whether this backend handles integer variables
    fn supports_mip(&self) -> bool;
}
