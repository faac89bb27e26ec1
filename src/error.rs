//! Error types for the perceptron.

use thiserror::Error;

/// # Overview
///
/// Errors that can occur when building, training or benchmarking a
/// perceptron.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("training set must contain at least one point")]
    EmptyTrainingSet,
    #[error("max_iterations must be > 0")]
    InvalidIterationCap,
    #[error("eval_points must be > 0")]
    InvalidEvalPoints,
    #[error("training point {index} lies on the target line")]
    BoundaryPoint { index: usize },
    #[error("target boundary points coincide")]
    DegenerateTarget,
    #[error("did not converge within {iterations} iterations")]
    NotConverged { iterations: usize },
    #[error("training stopped by callback after {iterations} iterations")]
    Stopped { iterations: usize },
    #[error("experiment needs at least one run")]
    NoRuns
}

/// # Overview
///
/// Result type for perceptron operations.
pub type Result<T> = core::result::Result<T, Error>;
