use oscillo::{
    classify, sweep, DriverConfig, NoOpStepObserver, ParameterLimits, PhysicalParameters, SimulationDriver,
    SweepConfig,
};
use wasm_bindgen::prelude::*;

fn to_js(err: oscillo::PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---- Live Oscillator Demo ----

#[wasm_bindgen]
pub struct OscillatorDemo {
    driver: SimulationDriver<f64>,
    limits: ParameterLimits<f64>,
}

impl OscillatorDemo {
    fn build(
        params: PhysicalParameters<f64>,
        config: DriverConfig<f64>,
        limits: ParameterLimits<f64>,
    ) -> Result<OscillatorDemo, JsValue> {
        let driver = SimulationDriver::new(limits.clamp(&params), config).map_err(to_js)?;
        Ok(OscillatorDemo { driver, limits })
    }
}

#[wasm_bindgen]
impl OscillatorDemo {
    /// Sandbox view: all three sliders, 500 plotted samples.
    #[wasm_bindgen(constructor)]
    pub fn new(mass: f64, spring_constant: f64, damping: f64) -> Result<OscillatorDemo, JsValue> {
        Self::build(
            PhysicalParameters::new(mass, spring_constant, damping),
            DriverConfig::sandbox(),
            ParameterLimits::new(),
        )
    }

    /// Free-oscillation view: damping pinned at zero, 300 plotted samples.
    /// [`set_damping`](Self::set_damping) has no effect here.
    pub fn undamped(mass: f64, spring_constant: f64) -> Result<OscillatorDemo, JsValue> {
        Self::build(
            PhysicalParameters::undamped(mass, spring_constant),
            DriverConfig::undamped(),
            ParameterLimits::new().with_damping(0.0, 0.0),
        )
    }

    /// One animation frame. Returns the new position.
    pub fn update(&mut self) -> f64 {
        self.driver.tick(&mut NoOpStepObserver).position
    }

    pub fn set_mass(&mut self, mass: f64) {
        let params = self.driver.params().with_mass(mass);
        self.driver.set_params(self.limits.clamp(&params));
    }

    pub fn set_spring_constant(&mut self, spring_constant: f64) {
        let params = self.driver.params().with_spring_constant(spring_constant);
        self.driver.set_params(self.limits.clamp(&params));
    }

    /// Clamped to the view's limits, so the undamped view stays at β = 0.
    pub fn set_damping(&mut self, damping: f64) {
        let params = self.driver.params().with_damping(damping);
        self.driver.set_params(self.limits.clamp(&params));
    }

    pub fn reset(&mut self) {
        self.driver.reset();
    }

    pub fn position(&self) -> f64 {
        self.driver.state().position
    }

    pub fn time(&self) -> f64 {
        self.driver.time()
    }

    /// Returns plotted positions, oldest first.
    pub fn positions(&self) -> Vec<f64> {
        self.driver.history().positions()
    }

    /// Returns flat [t0, x0, t1, x1, ...], oldest first.
    pub fn samples(&self) -> Vec<f64> {
        self.driver.history().flatten()
    }

    pub fn history_capacity(&self) -> usize {
        self.driver.history().capacity()
    }

    pub fn regime(&self) -> String {
        self.driver.regime().label().to_string()
    }

    pub fn discriminant(&self) -> f64 {
        self.driver.classification().discriminant
    }

    pub fn caption(&self) -> String {
        self.driver.classification().caption()
    }
}

// ---- Damped Sweep Demo ----

/// Returns flat [t0, x0, t1, x1, ...] for the first 10 s starting from x = 1.
#[wasm_bindgen]
pub fn damped_sweep(mass: f64, spring_constant: f64, damping: f64) -> Result<Vec<f64>, JsValue> {
    let params = ParameterLimits::new().clamp(&PhysicalParameters::new(mass, spring_constant, damping));
    let samples = sweep(&params, &SweepConfig::new()).map_err(to_js)?;
    let mut out = Vec::with_capacity(samples.len() * 2);
    for s in &samples {
        out.push(s.time);
        out.push(s.position);
    }
    Ok(out)
}

/// Returns [discriminant, regime] where regime is 0 = over, 1 = critical, 2 = under.
#[wasm_bindgen]
pub fn classify_regime(mass: f64, spring_constant: f64, damping: f64) -> Vec<f64> {
    let c = classify(&PhysicalParameters::new(mass, spring_constant, damping));
    let code = match c.regime {
        oscillo::Regime::Overdamped => 0.0,
        oscillo::Regime::CriticallyDamped => 1.0,
        oscillo::Regime::Underdamped => 2.0,
    };
    vec![c.discriminant, code]
}
