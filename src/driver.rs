//! Per-visualization simulation driver.
//!
//! A driver exclusively owns one oscillator state and its sample history.
//! It does no scheduling of its own: whatever animates the display calls
//! [`SimulationDriver::tick`] at its own cadence, and each call advances the
//! simulation by exactly one fixed `dt`. Run one driver per visualization.

use tracing::{debug, warn};

use crate::config::DriverConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::history::{History, Sample};
use crate::integrator;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::params::PhysicalParameters;
use crate::regime::{classify_with_tolerance, Regime, RegimeClassification};
use crate::state::OscillatorState;

/// Steps an oscillator at a fixed rate and records a bounded trace.
#[derive(Clone, Debug)]
pub struct SimulationDriver<F: Float> {
    config: DriverConfig<F>,
    params: PhysicalParameters<F>,
    classification: RegimeClassification<F>,
    state: OscillatorState<F>,
    time: F,
    ticks: usize,
    history: History<Sample<F>>,
    diverged: bool,
}

impl<F: Float> SimulationDriver<F> {
    /// Create a driver seeded with `config.initial_state`.
    ///
    /// Only the config is validated. Parameters are trusted; range-check them
    /// with [`ParameterLimits`](crate::config::ParameterLimits) first if they
    /// come straight from user input.
    pub fn new(params: PhysicalParameters<F>, config: DriverConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        let classification = classify_with_tolerance(&params, config.tolerance);
        Ok(SimulationDriver {
            config,
            params,
            classification,
            state: config.initial_state,
            time: F::zero(),
            ticks: 0,
            history: History::new(config.history_capacity),
            diverged: false,
        })
    }

    /// Advance one `dt`, record the new position and return the new state.
    pub fn tick<O: StepObserver<F>>(&mut self, observer: &mut O) -> OscillatorState<F> {
        self.state = integrator::step(self.config.dt, self.state, &self.params);
        self.ticks += 1;
        self.time = F::from_usize(self.ticks) * self.config.dt;

        if !self.diverged && !self.state.is_finite() {
            self.diverged = true;
            warn!(
                time = %self.time,
                mass = %self.params.mass,
                spring_constant = %self.params.spring_constant,
                "oscillator state became non-finite"
            );
        }

        observer.on_step(self.time, &self.state);

        let sample = Sample { time: self.time, position: self.state.position };
        if let Some(evicted) = self.history.push(sample) {
            observer.on_evict(&evicted);
        }
        self.state
    }

    /// Run `n` ticks back to back.
    pub fn run<O: StepObserver<F>>(&mut self, n: usize, observer: &mut O) -> OscillatorState<F> {
        for _ in 0..n {
            self.tick(observer);
        }
        self.state
    }

    /// Return to the initial condition at `t = 0` and drop the history.
    pub fn reset(&mut self) {
        self.reset_with(&mut NoOpStepObserver);
    }

    /// [`reset`](Self::reset), notifying `observer` that its trace was cleared.
    pub fn reset_with<O: StepObserver<F>>(&mut self, observer: &mut O) {
        self.state = self.config.initial_state;
        self.time = F::zero();
        self.ticks = 0;
        self.history.clear();
        self.diverged = false;
        debug!(
            position = %self.state.position,
            velocity = %self.state.velocity,
            "simulation reset"
        );
        observer.on_reset(&self.state);
    }

    /// Swap in new parameters, reclassify and reset.
    ///
    /// Every trajectory for a given parameter set starts from the same initial
    /// condition. Setting identical parameters is a no-op and keeps the
    /// running trace.
    pub fn set_params(&mut self, params: PhysicalParameters<F>) {
        self.set_params_with(params, &mut NoOpStepObserver);
    }

    /// [`set_params`](Self::set_params), notifying `observer` if it resets.
    /// Returns whether the parameters changed.
    pub fn set_params_with<O: StepObserver<F>>(&mut self, params: PhysicalParameters<F>, observer: &mut O) -> bool {
        if params == self.params {
            return false;
        }
        self.params = params;
        self.classification = classify_with_tolerance(&params, self.config.tolerance);
        debug!(
            mass = %params.mass,
            spring_constant = %params.spring_constant,
            damping = %params.damping_coefficient,
            regime = %self.classification.regime,
            discriminant = %self.classification.discriminant,
            "parameters changed"
        );
        self.reset_with(observer);
        true
    }

    pub fn set_mass(&mut self, mass: F) {
        self.set_params(self.params.with_mass(mass));
    }

    pub fn set_spring_constant(&mut self, spring_constant: F) {
        self.set_params(self.params.with_spring_constant(spring_constant));
    }

    pub fn set_damping(&mut self, damping_coefficient: F) {
        self.set_params(self.params.with_damping(damping_coefficient));
    }

    pub fn state(&self) -> OscillatorState<F> { self.state }
    pub fn params(&self) -> &PhysicalParameters<F> { &self.params }
    pub fn config(&self) -> &DriverConfig<F> { &self.config }
    pub fn classification(&self) -> &RegimeClassification<F> { &self.classification }
    pub fn regime(&self) -> Regime { self.classification.regime }
    pub fn history(&self) -> &History<Sample<F>> { &self.history }

    /// Simulated seconds since the last reset.
    pub fn time(&self) -> F { self.time }

    pub fn ticks(&self) -> usize { self.ticks }

    /// Whether the state has gone non-finite since the last reset.
    pub fn has_diverged(&self) -> bool { self.diverged }

    /// Current mechanical energy, `½·m·v² + ½·k·x²`.
    pub fn energy(&self) -> F {
        self.state.mechanical_energy(&self.params)
    }
}
