//! Closed-form solutions of the damped oscillator.
//!
//! Used as the reference the RK4 stepper is checked against, and by callers
//! that want an exact position at an arbitrary time without stepping.
//! The branch is chosen on the exact sign of `Δ`, not on the tolerance band
//! used for display in [`crate::regime`].

use crate::float::Float;
use crate::params::PhysicalParameters;
use crate::regime::discriminant;
use crate::state::OscillatorState;

/// State at time `t` of the system released from `initial` at `t = 0`.
pub fn exact_state<F: Float>(
    params: &PhysicalParameters<F>,
    initial: OscillatorState<F>,
    t: F,
) -> OscillatorState<F> {
    let x0 = initial.position;
    let v0 = initial.velocity;
    let gamma = params.decay_rate();
    let d = discriminant(params);

    if d < F::zero() {
        // x = e^(-γt)·(A·cos ωd·t + B·sin ωd·t)
        let w0_sq = params.spring_constant / params.mass;
        let wd = (w0_sq - gamma * gamma).sqrt();
        let envelope = (-gamma * t).exp();
        let cos_term = (wd * t).cos();
        let sin_term = (wd * t).sin();

        let a = x0;
        let b = (v0 + gamma * x0) / wd;

        let position = envelope * (a * cos_term + b * sin_term);
        let velocity = envelope * ((b * wd - gamma * a) * cos_term - (a * wd + gamma * b) * sin_term);
        OscillatorState { position, velocity }
    } else if d > F::zero() {
        // x = c1·e^(r1·t) + c2·e^(r2·t)
        let w0_sq = params.spring_constant / params.mass;
        let s = (gamma * gamma - w0_sq).sqrt();
        let r1 = -gamma + s;
        let r2 = -gamma - s;
        let denom = F::one() / (r2 - r1);

        let c1 = (x0 * r2 - v0) * denom;
        let c2 = (v0 - x0 * r1) * denom;

        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        OscillatorState {
            position: c1 * e1 + c2 * e2,
            velocity: c1 * r1 * e1 + c2 * r2 * e2,
        }
    } else {
        // x = (x0 + (v0 + γ·x0)·t)·e^(-γt)
        let envelope = (-gamma * t).exp();
        let c = v0 + gamma * x0;
        OscillatorState {
            position: (x0 + c * t) * envelope,
            velocity: (v0 - c * gamma * t) * envelope,
        }
    }
}
