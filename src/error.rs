//! Error types for parameter and configuration validation.
//!
//! The numeric core (`integrator::step`, `regime::classify`) never returns
//! these. They are produced by the validating constructors that sit between
//! user-facing controls and the core.

use thiserror::Error;

/// Errors raised when validating oscillator parameters or driver settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Spring constant must be positive and finite.
    #[error("spring constant must be positive and finite")]
    InvalidSpringConstant,
    /// Damping coefficient must be non-negative and finite.
    #[error("damping coefficient must be non-negative and finite")]
    InvalidDamping,
    /// Time step must be positive and finite.
    #[error("time step must be positive and finite")]
    InvalidTimeStep,
    /// Sweep duration must be non-negative and finite.
    #[error("duration must be non-negative and finite")]
    InvalidDuration,
    /// Classification tolerance must be non-negative and finite.
    #[error("tolerance must be non-negative and finite")]
    InvalidTolerance,
    /// A sweep would produce more samples than allowed.
    #[error("sweep needs {requested} samples, limit is {max}")]
    TooManySamples { requested: f64, max: usize },
    /// A parameter fell outside the range allowed by the controls.
    #[error("{parameter} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
