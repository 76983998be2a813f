//! Configuration types for simulation drivers, sweeps and parameter controls.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::params::PhysicalParameters;
use crate::regime::REGIME_TOLERANCE;
use crate::state::OscillatorState;

/// Configuration for a [`SimulationDriver`](crate::driver::SimulationDriver).
///
/// # Builder Pattern
/// ```
/// use oscillo::config::DriverConfig;
/// use oscillo::OscillatorState;
///
/// let config: DriverConfig<f64> = DriverConfig::new()
///     .with_dt(0.02)
///     .with_history_capacity(300)
///     .with_initial_state(OscillatorState::at_rest(0.8));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverConfig<F: Float> {
    /// Simulated seconds per tick. Default: 0.02.
    pub dt: F,
    /// Samples kept for plotting. Default: 500.
    pub history_capacity: usize,
    /// State restored on every reset. Default: x = 0.8, v = 0.
    pub initial_state: OscillatorState<F>,
    /// Half-width of the critically damped band. Default: 0.01.
    pub tolerance: F,
}

impl<F: Float> DriverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        DriverConfig {
            dt: F::from_f64(0.02),
            history_capacity: 500,
            initial_state: OscillatorState::at_rest(F::from_f64(0.8)),
            tolerance: F::from_f64(REGIME_TOLERANCE),
        }
    }

    /// Free-oscillation view: 300 samples at 50 Hz.
    pub fn undamped() -> Self {
        Self::new().with_history_capacity(300)
    }

    /// Combined view with all three sliders: 500 samples at 50 Hz.
    pub fn sandbox() -> Self {
        Self::new().with_history_capacity(500)
    }

    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    /// Set the history capacity (at least 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    pub fn with_initial_state(mut self, state: OscillatorState<F>) -> Self {
        self.initial_state = state;
        self
    }

    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.dt.is_finite() && self.dt > F::zero()) {
            return Err(PhysicsError::InvalidTimeStep);
        }
        if !(self.tolerance.is_finite() && self.tolerance >= F::zero()) {
            return Err(PhysicsError::InvalidTolerance);
        }
        Ok(())
    }
}

impl<F: Float> Default for DriverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bound on the number of samples a single sweep may produce.
pub const MAX_SWEEP_SAMPLES: usize = 1_000_000;

/// Configuration for a whole-trajectory [`sweep`](crate::sweep::sweep).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig<F: Float> {
    /// Spacing between samples. Default: 0.05.
    pub dt: F,
    /// Last sampled time (inclusive, up to rounding). Default: 10.
    pub max_time: F,
    /// Default: x = 1, v = 0.
    pub initial_state: OscillatorState<F>,
}

impl<F: Float> SweepConfig<F> {
    pub fn new() -> Self {
        SweepConfig {
            dt: F::from_f64(0.05),
            max_time: F::from_f64(10.0),
            initial_state: OscillatorState::at_rest(F::one()),
        }
    }

    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_max_time(mut self, max_time: F) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn with_initial_state(mut self, state: OscillatorState<F>) -> Self {
        self.initial_state = state;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.dt.is_finite() && self.dt > F::zero()) {
            return Err(PhysicsError::InvalidTimeStep);
        }
        if !(self.max_time.is_finite() && self.max_time >= F::zero()) {
            return Err(PhysicsError::InvalidDuration);
        }
        let ratio = self.max_time / self.dt;
        if !ratio.is_finite() || ratio >= F::from_usize(MAX_SWEEP_SAMPLES) {
            return Err(PhysicsError::TooManySamples {
                requested: ratio.to_f64() + 1.0,
                max: MAX_SWEEP_SAMPLES,
            });
        }
        Ok(())
    }
}

impl<F: Float> Default for SweepConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive ranges accepted from user controls.
///
/// Keeping mass and spring constant bounded away from zero here is what lets
/// the integrator skip its own checks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterLimits<F: Float> {
    pub mass: (F, F),
    pub spring_constant: (F, F),
    pub damping_coefficient: (F, F),
}

impl<F: Float> ParameterLimits<F> {
    /// m ∈ [0.1, 5] kg, k ∈ [1, 100] N/m, β ∈ [0, 20] N·s/m.
    pub fn new() -> Self {
        ParameterLimits {
            mass: (F::from_f64(0.1), F::from_f64(5.0)),
            spring_constant: (F::one(), F::from_f64(100.0)),
            damping_coefficient: (F::zero(), F::from_f64(20.0)),
        }
    }

    pub fn with_mass(mut self, min: F, max: F) -> Self {
        self.mass = (min, max);
        self
    }

    pub fn with_spring_constant(mut self, min: F, max: F) -> Self {
        self.spring_constant = (min, max);
        self
    }

    pub fn with_damping(mut self, min: F, max: F) -> Self {
        self.damping_coefficient = (min, max);
        self
    }

    pub fn validate(&self, params: &PhysicalParameters<F>) -> Result<(), PhysicsError> {
        check("mass", params.mass, self.mass)?;
        check("spring_constant", params.spring_constant, self.spring_constant)?;
        check("damping_coefficient", params.damping_coefficient, self.damping_coefficient)?;
        Ok(())
    }

    /// Coerce every field into range. NaN fields map to the lower bound.
    pub fn clamp(&self, params: &PhysicalParameters<F>) -> PhysicalParameters<F> {
        PhysicalParameters {
            mass: clamp_into(params.mass, self.mass),
            spring_constant: clamp_into(params.spring_constant, self.spring_constant),
            damping_coefficient: clamp_into(params.damping_coefficient, self.damping_coefficient),
        }
    }
}

impl<F: Float> Default for ParameterLimits<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn check<F: Float>(parameter: &'static str, value: F, (min, max): (F, F)) -> Result<(), PhysicsError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(PhysicsError::OutOfRange {
            parameter,
            value: value.to_f64(),
            min: min.to_f64(),
            max: max.to_f64(),
        })
    }
}

fn clamp_into<F: Float>(value: F, (min, max): (F, F)) -> F {
    if value.is_finite() || value > max {
        value.clamp(min, max)
    } else {
        min
    }
}
