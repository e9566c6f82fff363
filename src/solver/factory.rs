// Factory mapping a backend tag to a solver instance
//
// An unavailable backend is a fatal acquisition failure; it is reported once
// and never retried.

use crate::domain::solver_service::Result;
use crate::domain::{SolverBackend, SolverService};
use crate::solver::MicrolpSolver;

#[cfg(feature = "cbc")]
use crate::solver::CoinCbcSolver;
#[cfg(feature = "highs")]
use crate::solver::HighsSolver;

pub struct SolverFactory;

impl SolverFactory {
    /// Create a solver for the requested backend
    pub fn create(backend: SolverBackend) -> Result<Box<dyn SolverService>> {
        match backend {
            SolverBackend::Auto => Ok(auto_solver()),
            SolverBackend::Microlp => Ok(Box::new(MicrolpSolver::new())),
            SolverBackend::CoinCbc => cbc_solver(),
            SolverBackend::Highs => highs_solver(),
        }
    }
}

/// First available backend, preferring the native solvers when compiled in
fn auto_solver() -> Box<dyn SolverService> {
    #[cfg(feature = "highs")]
    return Box::new(HighsSolver::new());
    #[cfg(all(feature = "cbc", not(feature = "highs")))]
    return Box::new(CoinCbcSolver::new());
    #[cfg(not(any(feature = "cbc", feature = "highs")))]
    Box::new(MicrolpSolver::new())
}

#[cfg(feature = "cbc")]
fn cbc_solver() -> Result<Box<dyn SolverService>> {
    Ok(Box::new(CoinCbcSolver::new()))
}

#[cfg(not(feature = "cbc"))]
fn cbc_solver() -> Result<Box<dyn SolverService>> {
    Err(crate::domain::SolverError::BackendUnavailable(
        "COIN-OR CBC support is not compiled in; rebuild with --features cbc".to_string(),
    ))
}

#[cfg(feature = "highs")]
fn highs_solver() -> Result<Box<dyn SolverService>> {
    Ok(Box::new(HighsSolver::new()))
}

#[cfg(not(feature = "highs"))]
fn highs_solver() -> Result<Box<dyn SolverService>> {
    Err(crate::domain::SolverError::BackendUnavailable(
        "HiGHS support is not compiled in; rebuild with --features highs".to_string(),
    ))
}
