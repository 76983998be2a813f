//! Physical parameters of a spring-mass-damper system.

use crate::error::PhysicsError;
use crate::float::Float;

/// Mass, spring constant and damping coefficient of the system
/// `m·x'' + β·x' + k·x = 0`.
///
/// `new` performs no checks: the integrator accepts whatever it is given and
/// a zero mass simply produces non-finite states. Use [`try_new`] or
/// [`validate`] at the boundary where values come from user input.
///
/// [`try_new`]: PhysicalParameters::try_new
/// [`validate`]: PhysicalParameters::validate
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalParameters<F: Float> {
    /// Mass `m`, strictly positive.
    pub mass: F,
    /// Spring constant `k`, strictly positive.
    pub spring_constant: F,
    /// Damping coefficient `β`, non-negative.
    pub damping_coefficient: F,
}

impl<F: Float> PhysicalParameters<F> {
    pub fn new(mass: F, spring_constant: F, damping_coefficient: F) -> Self {
        PhysicalParameters { mass, spring_constant, damping_coefficient }
    }

    /// Frictionless system (`β = 0`).
    pub fn undamped(mass: F, spring_constant: F) -> Self {
        Self::new(mass, spring_constant, F::zero())
    }

    /// Build and validate in one go.
    pub fn try_new(mass: F, spring_constant: F, damping_coefficient: F) -> Result<Self, PhysicsError> {
        let params = Self::new(mass, spring_constant, damping_coefficient);
        params.validate()?;
        Ok(params)
    }

    /// Check that the parameters describe a physical system.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.mass.is_finite() && self.mass > F::zero()) {
            return Err(PhysicsError::InvalidMass);
        }
        if !(self.spring_constant.is_finite() && self.spring_constant > F::zero()) {
            return Err(PhysicsError::InvalidSpringConstant);
        }
        if !(self.damping_coefficient.is_finite() && self.damping_coefficient >= F::zero()) {
            return Err(PhysicsError::InvalidDamping);
        }
        Ok(())
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_spring_constant(mut self, spring_constant: F) -> Self {
        self.spring_constant = spring_constant;
        self
    }

    pub fn with_damping(mut self, damping_coefficient: F) -> Self {
        self.damping_coefficient = damping_coefficient;
        self
    }

    /// Natural angular frequency `ω₀ = √(k/m)` in rad/s.
    pub fn natural_frequency(&self) -> F {
        (self.spring_constant / self.mass).sqrt()
    }

    /// Natural frequency `f₀ = ω₀ / 2π` in Hz.
    pub fn frequency_hz(&self) -> F {
        self.natural_frequency() / (F::two() * F::pi())
    }

    /// Undamped period `T₀ = 2π / ω₀`.
    pub fn period(&self) -> F {
        F::two() * F::pi() / self.natural_frequency()
    }

    /// Damping ratio `ζ = β / (2·√(m·k))`. 1 at critical damping.
    pub fn damping_ratio(&self) -> F {
        self.damping_coefficient / (F::two() * (self.mass * self.spring_constant).sqrt())
    }

    /// Exponential decay rate of the envelope, `γ = β / 2m`.
    pub fn decay_rate(&self) -> F {
        self.damping_coefficient / (F::two() * self.mass)
    }
}

impl<F: Float> Default for PhysicalParameters<F> {
    /// 1 kg on a 10 N/m spring with β = 0.5 N·s/m.
    fn default() -> Self {
        Self::new(F::one(), F::from_f64(10.0), F::half())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_quantities() {
        let p = PhysicalParameters::new(2.0f64, 8.0, 4.0);
        assert!((p.natural_frequency() - 2.0).abs() < 1e-12);
        assert!((p.period() - core::f64::consts::PI).abs() < 1e-12);
        assert!((p.damping_ratio() - 0.5).abs() < 1e-12);
        assert!((p.decay_rate() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn doubling_mass_scales_period_by_sqrt2() {
        let p = PhysicalParameters::undamped(1.0f64, 10.0);
        let heavier = p.with_mass(2.0);
        let ratio = heavier.period() / p.period();
        assert!((ratio - core::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn validation_rejects_non_physical() {
        assert_eq!(PhysicalParameters::try_new(0.0f64, 1.0, 0.0), Err(PhysicsError::InvalidMass));
        assert_eq!(PhysicalParameters::try_new(1.0f64, -1.0, 0.0), Err(PhysicsError::InvalidSpringConstant));
        assert_eq!(PhysicalParameters::try_new(1.0f64, 1.0, -0.1), Err(PhysicsError::InvalidDamping));
        assert_eq!(PhysicalParameters::try_new(f64::NAN, 1.0, 0.0), Err(PhysicsError::InvalidMass));
        assert!(PhysicalParameters::try_new(1.0f64, 1.0, 0.0).is_ok());
    }
}
