use oscillo::integrator::{self, acceleration};
use oscillo::{exact_state, step, OscillatorState, PhysicalParameters};

/// Textbook RK4 for `x' = v, v' = (-k·x - β·v) / m`, written out longhand.
fn reference_rk4(dt: f64, x: f64, v: f64, m: f64, k: f64, beta: f64) -> (f64, f64) {
    let a = |px: f64, pv: f64| (-k * px - beta * pv) / m;

    let k1x = v;
    let k1v = a(x, v);
    let k2x = v + 0.5 * dt * k1v;
    let k2v = a(x + 0.5 * dt * k1x, v + 0.5 * dt * k1v);
    let k3x = v + 0.5 * dt * k2v;
    let k3v = a(x + 0.5 * dt * k2x, v + 0.5 * dt * k2v);
    let k4x = v + dt * k3v;
    let k4v = a(x + dt * k3x, v + dt * k3v);

    (
        x + (dt / 6.0) * (k1x + 2.0 * k2x + 2.0 * k3x + k4x),
        v + (dt / 6.0) * (k1v + 2.0 * k2v + 2.0 * k3v + k4v),
    )
}

#[test]
fn matches_reference_rk4_bit_for_bit() {
    let cases = [
        (0.02, 0.8, 0.0, 1.0, 10.0, 0.5),
        (0.05, 1.0, 0.0, 1.0, 10.0, 0.5),
        (0.03, -0.4, 2.5, 4.7, 63.0, 19.3),
        (0.001, 1e-3, -7.0, 0.1, 100.0, 0.0),
    ];
    for (dt, x, v, m, k, beta) in cases {
        let params = PhysicalParameters::new(m, k, beta);
        let next = step(dt, OscillatorState::new(x, v), &params);
        let (rx, rv) = reference_rk4(dt, x, v, m, k, beta);
        assert_eq!(next.position.to_bits(), rx.to_bits(), "position for {:?}", (dt, x, v, m, k, beta));
        assert_eq!(next.velocity.to_bits(), rv.to_bits(), "velocity for {:?}", (dt, x, v, m, k, beta));
    }
}

#[test]
fn input_state_is_untouched() {
    let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
    let state = OscillatorState::new(0.8, 0.0);
    let _ = step(0.02, state, &params);
    assert_eq!(state, OscillatorState::new(0.8, 0.0));
}

#[test]
fn undamped_energy_conserved() {
    for (m, k) in [(1.0f64, 10.0), (2.5, 40.0), (0.1, 1.0)] {
        let params = PhysicalParameters::undamped(m, k);
        let mut state = OscillatorState::at_rest(0.8);
        let e0 = state.mechanical_energy(&params);
        for _ in 0..1000 {
            state = step(0.02, state, &params);
        }
        let drift = (state.mechanical_energy(&params) - e0).abs() / e0;
        assert!(drift < 1e-5, "m = {}, k = {}: relative energy drift {}", m, k, drift);
    }
}

#[test]
fn damped_energy_decreases() {
    let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
    let mut state = OscillatorState::at_rest(0.8);
    let mut previous = state.mechanical_energy(&params);
    for window in 0..40 {
        for _ in 0..25 {
            state = step(0.02, state, &params);
        }
        let energy = state.mechanical_energy(&params);
        assert!(energy < previous, "energy rose in window {}: {} -> {}", window, previous, energy);
        previous = energy;
    }
}

#[test]
fn quarter_period_of_unit_oscillator() {
    let params = PhysicalParameters::undamped(1.0f64, 1.0);
    let n = 1000;
    let dt = std::f64::consts::FRAC_PI_2 / n as f64;
    let end = integrator::integrate(dt, n, OscillatorState::at_rest(1.0), &params);
    assert!(end.position.abs() < 1e-8, "x = {}", end.position);
    assert!((end.velocity + 1.0).abs() < 1e-8, "v = {}", end.velocity);
}

#[test]
fn damped_scenario_stays_finite_and_decays() {
    let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
    let mut state = OscillatorState::at_rest(1.0);
    let mut positions = vec![state.position];
    for _ in 0..200 {
        state = step(0.05, state, &params);
        assert!(state.is_finite());
        positions.push(state.position);
    }

    let peaks: Vec<f64> = positions
        .windows(3)
        .filter(|w| w[1].abs() >= w[0].abs() && w[1].abs() >= w[2].abs())
        .map(|w| w[1].abs())
        .collect();
    assert!(!peaks.is_empty());
    assert!(peaks[0] < 1.0, "first peak {}", peaks[0]);
    assert!(peaks.windows(2).all(|p| p[1] < p[0]), "peaks not decaying: {:?}", peaks);
    assert!(positions[150..].iter().all(|x| x.abs() < 0.5));
}

#[test]
fn agrees_with_closed_form_in_every_regime() {
    let initial = OscillatorState::new(0.8f64, 0.5);
    // Δ = β² - 16: under, exactly critical, over.
    for beta in [1.0, 4.0, 10.0] {
        let params = PhysicalParameters::new(1.0, 4.0, beta);
        let numeric = integrator::integrate(0.01, 500, initial, &params);
        let exact = exact_state(&params, initial, 5.0);
        assert!((numeric.position - exact.position).abs() < 1e-6, "beta {}: {} vs {}", beta, numeric.position, exact.position);
        assert!((numeric.velocity - exact.velocity).abs() < 1e-6, "beta {}: {} vs {}", beta, numeric.velocity, exact.velocity);
    }
}

#[test]
fn single_precision_tracks_double() {
    let p64 = PhysicalParameters::new(1.0f64, 10.0, 0.5);
    let p32 = PhysicalParameters::new(1.0f32, 10.0, 0.5);
    let s64 = integrator::integrate(0.02, 250, OscillatorState::at_rest(0.8), &p64);
    let s32 = integrator::integrate(0.02, 250, OscillatorState::at_rest(0.8f32), &p32);
    assert!((s64.position - s32.position as f64).abs() < 1e-4);
}

#[test]
fn acceleration_opposes_displacement() {
    let params = PhysicalParameters::new(1.0f64, 10.0, 0.0);
    assert!(acceleration(0.5, 0.0, &params) < 0.0);
    assert!(acceleration(-0.5, 0.0, &params) > 0.0);
}
