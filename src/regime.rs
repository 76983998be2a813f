//! Classification of the damping regime from the characteristic equation.
//!
//! The roots of `m·r² + β·r + k = 0` are real and distinct, repeated, or a
//! complex pair depending on the sign of the discriminant `Δ = β² - 4·m·k`.

use alloc::string::String;
use core::fmt;

use crate::float::Float;
use crate::params::PhysicalParameters;

/// Band around `Δ = 0` treated as critically damped.
///
/// An empirical tolerance with no derivation behind it. Scale-dependent:
/// heavy, stiff systems have large `|Δ|` and the band becomes negligibly
/// narrow. Override through [`RegimeClassifier`] when that matters.
pub const REGIME_TOLERANCE: f64 = 0.01;

/// Qualitative decay behaviour of a damped oscillator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regime {
    /// Two real roots: returns to equilibrium without oscillating.
    Overdamped,
    /// Repeated real root: fastest non-oscillating return.
    CriticallyDamped,
    /// Complex roots: oscillates inside a decaying envelope.
    Underdamped,
}

impl Regime {
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Overdamped => "Overdamped",
            Regime::CriticallyDamped => "Critically damped",
            Regime::Underdamped => "Underdamped",
        }
    }

    pub fn oscillates(&self) -> bool {
        matches!(self, Regime::Underdamped)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discriminant together with the regime it selects.
///
/// Derived entirely from the parameters; recompute whenever they change.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegimeClassification<F: Float> {
    /// `β² - 4·m·k`.
    pub discriminant: F,
    pub regime: Regime,
}

impl<F: Float> RegimeClassification<F> {
    /// On-screen caption, discriminant to two decimal places.
    pub fn caption(&self) -> String {
        alloc::format!("Δ = β² - 4mk = {:.2}", self.discriminant)
    }
}

impl<F: Float> fmt::Display for RegimeClassification<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Δ = {:.2})", self.regime, self.discriminant)
    }
}

/// `Δ = β² - 4·m·k`.
#[inline]
pub fn discriminant<F: Float>(params: &PhysicalParameters<F>) -> F {
    let beta = params.damping_coefficient;
    beta * beta - F::from_f64(4.0) * params.mass * params.spring_constant
}

/// Classify with the default [`REGIME_TOLERANCE`].
///
/// ```
/// use oscillo::{classify, PhysicalParameters, Regime};
///
/// let c = classify(&PhysicalParameters::new(1.0f64, 10.0, 0.5));
/// assert_eq!(c.regime, Regime::Underdamped);
/// ```
pub fn classify<F: Float>(params: &PhysicalParameters<F>) -> RegimeClassification<F> {
    classify_with_tolerance(params, F::from_f64(REGIME_TOLERANCE))
}

/// `Δ > ε` is overdamped, `Δ < -ε` underdamped, anything in between
/// (inclusive) critically damped. The sign of `tolerance` is ignored.
pub fn classify_with_tolerance<F: Float>(params: &PhysicalParameters<F>, tolerance: F) -> RegimeClassification<F> {
    let tolerance = tolerance.abs();
    let d = discriminant(params);
    let regime = if d > tolerance {
        Regime::Overdamped
    } else if d < -tolerance {
        Regime::Underdamped
    } else {
        Regime::CriticallyDamped
    };
    RegimeClassification { discriminant: d, regime }
}

/// Classifier carrying its own tolerance.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegimeClassifier<F: Float> {
    pub tolerance: F,
}

impl<F: Float> RegimeClassifier<F> {
    pub fn new(tolerance: F) -> Self {
        RegimeClassifier { tolerance: tolerance.abs() }
    }

    pub fn classify(&self, params: &PhysicalParameters<F>) -> RegimeClassification<F> {
        classify_with_tolerance(params, self.tolerance)
    }
}

impl<F: Float> Default for RegimeClassifier<F> {
    fn default() -> Self {
        Self::new(F::from_f64(REGIME_TOLERANCE))
    }
}
