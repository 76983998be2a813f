//! Benchmarks for oscillator stepping and drivers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oscillo::*;

fn bench_rk4_step(c: &mut Criterion) {
    let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
    c.bench_function("rk4_1000_steps", |b| {
        b.iter(|| {
            let mut state = OscillatorState::at_rest(0.8);
            for _ in 0..1000 {
                state = step(black_box(0.02), state, &params);
            }
            state
        });
    });
}

fn bench_driver_ticks(c: &mut Criterion) {
    c.bench_function("sandbox_driver_600_ticks", |b| {
        b.iter(|| {
            let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
            let mut driver = SimulationDriver::new(params, DriverConfig::sandbox()).unwrap();
            for _ in 0..600 {
                driver.tick(&mut NoOpStepObserver);
            }
            driver.history().len()
        });
    });
}

fn bench_sweep(c: &mut Criterion) {
    let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
    let config = SweepConfig::new();
    c.bench_function("damped_sweep_10s", |b| {
        b.iter(|| sweep(black_box(&params), &config).unwrap());
    });
}

fn bench_classify(c: &mut Criterion) {
    let params = PhysicalParameters::new(1.0f64, 2.5, 3.2);
    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(&params)));
    });
}

criterion_group!(benches, bench_rk4_step, bench_driver_ticks, bench_sweep, bench_classify);
criterion_main!(benches);
