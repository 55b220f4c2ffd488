//! Series RLC steady-state solver.
//!
//! This module provides the numerical core of the crate.
//!
//! ## Closed-form solution
//!
//! For a series RLC circuit driven by v(t) = V·sin(2πft), the steady state
//! follows directly from the impedance:
//!
//! ```text
//! ω  = 2πf
//! XL = ωL            XC = 1/(ωC)
//! Z  = √(R² + (XL − XC)²)
//! φ  = atan((XL − XC) / R)
//! I  = V / Z
//! S  = V·I     P = S·cos φ     Q = S·sin φ
//! ```
//!
//! Everything here is pure: the same parameters always produce the same
//! record, and no operation keeps state between calls.

mod circuit_solver;
mod phasor;
mod solution;
mod waveform;

pub use circuit_solver::{CircuitSolver, SolverConfig};
pub use phasor::{PhasorPair, PlotExtent, PowerTriangle, Segment, Vector2};
pub use solution::{PhaseConvention, SolutionRecord};
pub use waveform::{Waveform, WaveformIter, WaveformSample};

use crate::circuit::CircuitParameters;
use crate::error::Result;

/// Default number of waveform samples per period.
pub const DEFAULT_WAVEFORM_POINTS: usize = 500;

/// Phasor diagram axis limits as a multiple of the phasor magnitudes.
pub const PHASOR_PLOT_MARGIN: f64 = 1.2;

/// Solve `params` with the quadrant-correct phase convention.
pub fn solve(params: &CircuitParameters) -> Result<SolutionRecord> {
    SolutionRecord::compute(params, PhaseConvention::Quadrant)
}

/// Sample v(t) and i(t) at `num_points` evenly spaced times over one period.
pub fn sample_waveform(
    params: &CircuitParameters,
    solution: &SolutionRecord,
    num_points: usize,
) -> Result<Waveform> {
    Waveform::new(params, solution, num_points)
}

/// Voltage and current phasors of a solved circuit.
pub fn phasor_vectors(solution: &SolutionRecord) -> PhasorPair {
    PhasorPair::from_solution(solution)
}
