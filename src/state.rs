//! Oscillator state: displacement from equilibrium and its rate of change.

use crate::float::Float;
use crate::params::PhysicalParameters;

/// Position and velocity of the mass at one instant.
///
/// States are values: the integrator derives a new one from an old one and
/// never mutates its input.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OscillatorState<F: Float> {
    /// Signed displacement from equilibrium.
    pub position: F,
    /// Rate of change of `position`.
    pub velocity: F,
}

impl<F: Float> OscillatorState<F> {
    pub fn new(position: F, velocity: F) -> Self {
        OscillatorState { position, velocity }
    }

    /// Mass displaced by `position` and released from rest.
    pub fn at_rest(position: F) -> Self {
        OscillatorState { position, velocity: F::zero() }
    }

    /// Kinetic plus spring potential energy: `½·m·v² + ½·k·x²`.
    ///
    /// The damping term does not store energy, so with `β = 0` this is a
    /// conserved quantity of the exact solution.
    pub fn mechanical_energy(&self, params: &PhysicalParameters<F>) -> F {
        let kinetic = F::half() * params.mass * self.velocity * self.velocity;
        let potential = F::half() * params.spring_constant * self.position * self.position;
        kinetic + potential
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
