//! WASM bindings for RLC Core.
//!
//! This module provides JavaScript-friendly bindings for use in web pages
//! that draw the waveform, phasor and power triangle plots themselves.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmRlcSolver } from 'rlc_core';
//!
//! await init();
//!
//! const rlc = new WasmRlcSolver(10, 0.1, 0.001, 50, 100);
//! const t = rlc.waveform_times(500);
//! const v = rlc.waveform_voltages(500);
//! const i = rlc.waveform_currents(500);
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::CircuitParameters;
use crate::report::{document, json, spreadsheet};
use crate::solver::{CircuitSolver, PhaseConvention, PhasorPair, PowerTriangle, SolutionRecord, SolverConfig, Waveform};
use crate::RlcError;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: RlcError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A solved series RLC circuit.
///
/// Solving happens in the constructor, so an instance always holds a valid
/// solution and every export method can be called on it.
#[wasm_bindgen]
pub struct WasmRlcSolver {
    params: CircuitParameters,
    solution: SolutionRecord,
}

#[wasm_bindgen]
impl WasmRlcSolver {
    /// Solve a circuit with the quadrant-correct phase convention.
    ///
    /// # Example
    /// ```javascript
    /// const rlc = new WasmRlcSolver(10, 0.1, 0.001, 50, 100);
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(
        resistance: f64,
        inductance: f64,
        capacitance: f64,
        frequency: f64,
        voltage: f64,
    ) -> Result<WasmRlcSolver, JsValue> {
        Self::with_convention(resistance, inductance, capacitance, frequency, voltage, "quadrant")
    }

    /// Solve a circuit with a named phase convention (`"quadrant"` or `"principal"`).
    #[wasm_bindgen]
    pub fn with_convention(
        resistance: f64,
        inductance: f64,
        capacitance: f64,
        frequency: f64,
        voltage: f64,
        convention: &str,
    ) -> Result<WasmRlcSolver, JsValue> {
        let convention = PhaseConvention::from_str(convention).ok_or_else(|| {
            to_js(RlcError::WasmError {
                message: format!("unknown phase convention '{}'", convention),
            })
        })?;

        let params = CircuitParameters::new(resistance, inductance, capacitance, frequency, voltage)
            .map_err(to_js)?;
        let solver = CircuitSolver::with_config(SolverConfig::new().with_phase_convention(convention));
        let solution = solver.solve(&params).map_err(to_js)?;

        Ok(WasmRlcSolver { params, solution })
    }

    #[wasm_bindgen(getter)]
    pub fn omega(&self) -> f64 {
        self.solution.omega()
    }

    #[wasm_bindgen(getter)]
    pub fn inductive_reactance(&self) -> f64 {
        self.solution.inductive_reactance()
    }

    #[wasm_bindgen(getter)]
    pub fn capacitive_reactance(&self) -> f64 {
        self.solution.capacitive_reactance()
    }

    #[wasm_bindgen(getter)]
    pub fn impedance(&self) -> f64 {
        self.solution.impedance()
    }

    /// Phase angle in radians.
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> f64 {
        self.solution.phase()
    }

    #[wasm_bindgen(getter)]
    pub fn phase_degrees(&self) -> f64 {
        self.solution.phase_degrees()
    }

    #[wasm_bindgen(getter)]
    pub fn current(&self) -> f64 {
        self.solution.current()
    }

    #[wasm_bindgen(getter)]
    pub fn apparent_power(&self) -> f64 {
        self.solution.apparent_power()
    }

    #[wasm_bindgen(getter)]
    pub fn real_power(&self) -> f64 {
        self.solution.real_power()
    }

    #[wasm_bindgen(getter)]
    pub fn reactive_power(&self) -> f64 {
        self.solution.reactive_power()
    }

    /// Sample times of one period.
    #[wasm_bindgen]
    pub fn waveform_times(&self, num_points: usize) -> Result<Vec<f64>, JsValue> {
        Ok(self.waveform(num_points)?.iter().map(|s| s.t).collect())
    }

    /// Source voltage at each sample time.
    #[wasm_bindgen]
    pub fn waveform_voltages(&self, num_points: usize) -> Result<Vec<f64>, JsValue> {
        Ok(self.waveform(num_points)?.iter().map(|s| s.voltage).collect())
    }

    /// Circuit current at each sample time.
    #[wasm_bindgen]
    pub fn waveform_currents(&self, num_points: usize) -> Result<Vec<f64>, JsValue> {
        Ok(self.waveform(num_points)?.iter().map(|s| s.current).collect())
    }

    /// Phasor endpoints as `[v_re, v_im, i_re, i_im]`.
    #[wasm_bindgen]
    pub fn phasors(&self) -> Vec<f64> {
        let pair = PhasorPair::from_solution(&self.solution);
        vec![pair.voltage.x, pair.voltage.y, pair.current.x, pair.current.y]
    }

    /// Power triangle corners as `[P, Q, S]`.
    #[wasm_bindgen]
    pub fn power_triangle(&self) -> Vec<f64> {
        let tri = PowerTriangle::from_solution(&self.solution);
        vec![tri.real, tri.reactive, tri.apparent]
    }

    /// Plain-text results document.
    #[wasm_bindgen]
    pub fn document(&self) -> Result<String, JsValue> {
        let mut out = Vec::new();
        document::write_document(&self.solution, &mut out).map_err(to_js)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Two-column CSV table.
    #[wasm_bindgen]
    pub fn spreadsheet(&self) -> Result<String, JsValue> {
        let mut out = Vec::new();
        spreadsheet::write_spreadsheet(&self.solution, &mut out).map_err(to_js)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Full JSON report.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        json::to_json(&self.params, &self.solution).map_err(to_js)
    }
}

impl WasmRlcSolver {
    fn waveform(&self, num_points: usize) -> Result<Waveform, JsValue> {
        Waveform::new(&self.params, &self.solution, num_points).map_err(to_js)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
