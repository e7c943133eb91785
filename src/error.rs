use thiserror::Error;

/// Failures raised by the scoring and sizing core.
///
/// All of these are local and recoverable by the caller. Nothing is retried:
/// every operation is deterministic, so the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Arithmetic input the formula cannot evaluate (zero effort, NaN).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Caller-supplied data rejected before any change was made.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The id provider kept handing out identifiers that are already taken.
    #[error("Could not allocate a unique feature id after {attempts} attempts")]
    IdCollision { attempts: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
