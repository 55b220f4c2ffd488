//! # RLC Core
//!
//! Steady-state AC analysis of a series RLC circuit.
//!
//! This library provides:
//! - Closed-form impedance, phase, current and power for a sinusoidal source
//! - Time-domain voltage/current waveforms over one period
//! - Phasor diagram and power triangle geometry
//! - Export of results as a text document, CSV table and JSON
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Circuit parameters and their validation
//! - [`solver`] - The closed-form solver and derived series
//! - [`report`] - Step-by-step derivation and export formats
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use rlc_core::{CircuitParameters, CircuitSolver};
//!
//! let params = CircuitParameters::new(10.0, 0.1, 0.001, 50.0, 100.0)?;
//! let solver = CircuitSolver::new();
//! let solution = solver.solve(&params)?;
//!
//! assert!((solution.impedance() - 29.95).abs() < 0.01);
//! for sample in solver.sample_waveform(&params, &solution)? {
//!     let _ = (sample.t, sample.voltage, sample.current);
//! }
//! # Ok::<(), rlc_core::RlcError>(())
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! rlc -r 10 -l 0.1 -c 0.001 -f 50 -v 100 --document rlc_results.txt --spreadsheet rlc_results.csv
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmRlcSolver } from 'rlc_core';
//!
//! const result = new WasmRlcSolver(10, 0.1, 0.001, 50, 100);
//! console.log(result.impedance, result.phase_degrees);
//! ```

pub mod circuit;
pub mod error;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use circuit::CircuitParameters;
pub use error::{Divisor, Result, RlcError};
pub use solver::{
    phasor_vectors, sample_waveform, solve, CircuitSolver, PhaseConvention, PhasorPair,
    SolutionRecord, SolverConfig, Waveform, WaveformSample,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmRlcSolver;
