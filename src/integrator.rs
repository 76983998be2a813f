//! Fixed-step fourth-order Runge-Kutta integration of the damped oscillator.
//!
//! The second-order equation `m·x'' + β·x' + k·x = 0` is stepped as the
//! first-order system
//!
//! ```text
//! x' = v
//! v' = (-k·x - β·v) / m
//! ```
//!
//! Everything here is a pure function of its arguments. There is no error
//! estimate and no step-size control: callers pick `dt` once and keep it.

use crate::float::Float;
use crate::params::PhysicalParameters;
use crate::state::OscillatorState;

/// Acceleration `a(x, v) = (-k·x - β·v) / m`.
#[inline]
pub fn acceleration<F: Float>(position: F, velocity: F, params: &PhysicalParameters<F>) -> F {
    (-params.spring_constant * position - params.damping_coefficient * velocity) / params.mass
}

/// Advance `state` by one RK4 step of size `dt`.
///
/// Stage slopes are `(v, a(x, v))` evaluated at the start of the interval,
/// twice at the midpoint and once at the end, then blended with weights
/// `(1, 2, 2, 1) / 6`.
///
/// `params.mass` must be strictly positive. This is not checked in release
/// builds; a zero mass yields NaN or infinity in the returned state.
///
/// ```
/// use oscillo::{integrator, OscillatorState, PhysicalParameters};
///
/// let params = PhysicalParameters::undamped(1.0f64, 1.0);
/// let next = integrator::step(0.01, OscillatorState::at_rest(1.0), &params);
/// assert!(next.position < 1.0);
/// ```
pub fn step<F: Float>(dt: F, state: OscillatorState<F>, params: &PhysicalParameters<F>) -> OscillatorState<F> {
    debug_assert!(params.mass > F::zero(), "mass must be strictly positive");

    let x = state.position;
    let v = state.velocity;
    let half_dt = F::half() * dt;

    let k1_x = v;
    let k1_v = acceleration(x, v, params);

    let k2_x = v + half_dt * k1_v;
    let k2_v = acceleration(x + half_dt * k1_x, v + half_dt * k1_v, params);

    let k3_x = v + half_dt * k2_v;
    let k3_v = acceleration(x + half_dt * k2_x, v + half_dt * k2_v, params);

    let k4_x = v + dt * k3_v;
    let k4_v = acceleration(x + dt * k3_x, v + dt * k3_v, params);

    let two = F::two();
    let sixth = dt / F::from_f64(6.0);
    OscillatorState {
        position: x + sixth * (k1_x + two * k2_x + two * k3_x + k4_x),
        velocity: v + sixth * (k1_v + two * k2_v + two * k3_v + k4_v),
    }
}

/// Apply [`step`] `steps` times and return the final state.
pub fn integrate<F: Float>(
    dt: F,
    steps: usize,
    initial: OscillatorState<F>,
    params: &PhysicalParameters<F>,
) -> OscillatorState<F> {
    let mut state = initial;
    for _ in 0..steps {
        state = step(dt, state, params);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equilibrium_is_fixed_point() {
        let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
        let next = step(0.02, OscillatorState::default(), &params);
        assert_eq!(next, OscillatorState::default());
    }

    #[test]
    fn zero_dt_no_change() {
        let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
        let state = OscillatorState::new(0.3, -1.2);
        assert_eq!(step(0.0, state, &params), state);
    }

    #[test]
    fn acceleration_matches_hookes_law() {
        let params = PhysicalParameters::new(2.0f64, 50.0, 4.0);
        // (-50·0.2 - 4·1.0) / 2
        assert_eq!(acceleration(0.2, 1.0, &params), -7.0);
    }
}
