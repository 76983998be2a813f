//! Step observer trait for monitoring simulation progress.

use crate::float::Float;
use crate::history::Sample;
use crate::state::OscillatorState;

/// Trait for observing driver ticks.
///
/// Implement this trait to forward samples to a renderer, record traces, or
/// count evictions. All methods have default no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after each integration step with the new simulated time.
    fn on_step(&mut self, _time: F, _state: &OscillatorState<F>) {}

    /// Called when the history drops its oldest sample to make room.
    fn on_evict(&mut self, _sample: &Sample<F>) {}

    /// Called after the driver returns to its initial state and clears its history.
    fn on_reset(&mut self, _state: &OscillatorState<F>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
