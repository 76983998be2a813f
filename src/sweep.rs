//! Whole-trajectory sampling for static plots.

use alloc::vec::Vec;

use crate::config::{SweepConfig, MAX_SWEEP_SAMPLES};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::history::Sample;
use crate::integrator;
use crate::params::PhysicalParameters;

/// Sample a trajectory from `t = 0` to `config.max_time`.
///
/// Each sample records the state *before* the step that follows it, so the
/// first sample is the initial condition. Sample `i` sits at `i·dt`; there are
/// `⌊max_time / dt⌋ + 1` of them (a small slack absorbs ratios like
/// `10 / 0.05` landing just under an integer). More than
/// [`MAX_SWEEP_SAMPLES`] is rejected with [`PhysicsError::TooManySamples`].
pub fn sweep<F: Float>(
    params: &PhysicalParameters<F>,
    config: &SweepConfig<F>,
) -> Result<Vec<Sample<F>>, PhysicsError> {
    config.validate()?;

    let steps = (config.max_time / config.dt + F::from_f64(1e-9)).floor().to_usize();
    let count = match steps.checked_add(1) {
        Some(count) if count <= MAX_SWEEP_SAMPLES => count,
        _ => {
            return Err(PhysicsError::TooManySamples {
                requested: steps as f64 + 1.0,
                max: MAX_SWEEP_SAMPLES,
            })
        }
    };
    let mut samples = Vec::with_capacity(count);
    let mut state = config.initial_state;

    for i in 0..=steps {
        samples.push(Sample {
            time: F::from_usize(i) * config.dt,
            position: state.position,
        });
        state = integrator::step(config.dt, state, params);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_covers_ten_seconds() {
        let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
        let samples = sweep(&params, &SweepConfig::new()).unwrap();
        assert_eq!(samples.len(), 201);
        assert_eq!(samples[0], Sample { time: 0.0, position: 1.0 });
        assert!((samples[200].time - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_duration_gives_initial_only() {
        let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
        let samples = sweep(&params, &SweepConfig::new().with_max_time(0.0)).unwrap();
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn rejects_sample_count_overflow() {
        let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
        let result = sweep(&params, &SweepConfig::new().with_dt(1e-300));
        assert!(matches!(result, Err(PhysicsError::TooManySamples { .. })));
    }

    #[test]
    fn rejects_bad_dt() {
        let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
        assert_eq!(
            sweep(&params, &SweepConfig::new().with_dt(-0.05)),
            Err(PhysicsError::InvalidTimeStep)
        );
    }
}
