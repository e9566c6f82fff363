// Domain value objects representing core modeling concepts

use std::fmt;

/// Domain of a decision variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarDomain {
    /// Continuous real number (x ∈ ℝ)
    Continuous,
    /// Integer number (x ∈ ℤ)
    Integer,
}

/// Relational sense of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    /// Less than or equal (≤)
    LessOrEqual,
    /// Equal (=)
    Equal,
    /// Greater than or equal (≥)
    GreaterOrEqual,
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelOp::LessOrEqual => write!(f, "<="),
            RelOp::Equal => write!(f, "="),
            RelOp::GreaterOrEqual => write!(f, ">="),
        }
    }
}

/// Direction of optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// Minimize the objective function
    Minimize,
    /// Maximize the objective function
    Maximize,
}

/// Terminal status of a solve attempt
///
/// Every variant is a final, reportable outcome; none is retried. A
/// non-optimal status is a normal result of the domain, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Found a provably optimal solution
    Optimal,
    /// No point satisfies all constraints
    Infeasible,
    /// The objective can be improved without limit
    Unbounded,
    /// The backend stopped on an internal error
    Abnormal,
    /// Any other backend status; the raw code is kept in the result message
    Unknown,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::Infeasible => write!(f, "Infeasible"),
            SolveStatus::Unbounded => write!(f, "Unbounded"),
            SolveStatus::Abnormal => write!(f, "Abnormal"),
            SolveStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Solver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverBackend {
    /// Pick the first backend compiled into this build
    Auto,
    /// Pure-Rust microlp solver
    Microlp,
    /// COIN-OR CBC solver
    CoinCbc,
    /// HiGHS solver
    Highs,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::Auto => write!(f, "Auto"),
            SolverBackend::Microlp => write!(f, "microlp"),
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
        }
    }
}
