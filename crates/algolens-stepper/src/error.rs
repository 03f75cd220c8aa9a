//! Error types for steppers.

use thiserror::Error;

/// Result type for stepper operations.
pub type Result<T> = std::result::Result<T, StepperError>;

/// Errors surfaced by stepper operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepperError {
    /// `step` or `randomize` called before `start`
    #[error("Stepper not started")]
    NotStarted,
}
