//! Damped spring-mass oscillators for interactive simulations.
//!
//! `oscillo` steps the system `m·x'' + β·x' + k·x = 0` with fixed-step RK4
//! and classifies its damping regime from the discriminant `β² - 4mk`.
//! Rendering and controls live elsewhere; they feed parameters in and read
//! positions and regime captions out.
//!
//! # Features
//!
//! - **RK4 stepping**: pure, deterministic `step(dt, state, params)`
//! - **Regime classification**: over/critically/under-damped with a tunable tolerance band
//! - **Closed-form reference**: exact solutions for all three regimes
//! - **Simulation drivers**: per-visualization state with a bounded plot history
//! - **Sweeps**: whole-trajectory sampling for static plots
//! - **Observable**: Monitor driver ticks via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use oscillo::{DriverConfig, NoOpStepObserver, PhysicalParameters, Regime, SimulationDriver};
//!
//! let params = PhysicalParameters::new(1.0f64, 10.0, 0.5);
//! let mut driver = SimulationDriver::new(params, DriverConfig::sandbox()).unwrap();
//! assert_eq!(driver.regime(), Regime::Underdamped);
//!
//! for _ in 0..600 {
//!     driver.tick(&mut NoOpStepObserver);
//! }
//! assert_eq!(driver.history().len(), 500);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod state;
pub mod params;
pub mod integrator;
pub mod regime;
pub mod analytic;
pub mod history;
pub mod sweep;
pub mod driver;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use state::OscillatorState;
pub use params::PhysicalParameters;
pub use integrator::step;
pub use regime::{classify, Regime, RegimeClassification, RegimeClassifier, REGIME_TOLERANCE};
pub use analytic::exact_state;
pub use history::{History, Sample};
pub use sweep::sweep;
pub use driver::SimulationDriver;
pub use config::{DriverConfig, ParameterLimits, SweepConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
