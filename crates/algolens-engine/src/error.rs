//! Error types for the engine.

use thiserror::Error;

use algolens_scene::SceneError;
use algolens_stepper::StepperError;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the controller and registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// No factory registered under the requested key
    #[error("No algorithm registered for key: {0}")]
    UnknownAlgorithm(String),

    /// Scene error
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Stepper error
    #[error("Stepper error: {0}")]
    Stepper(#[from] StepperError),
}
