//! Main solver interface.

use crate::circuit::CircuitParameters;
use crate::error::Result;

use super::{
    PhaseConvention, PhasorPair, PowerTriangle, SolutionRecord, Waveform, DEFAULT_WAVEFORM_POINTS,
};

/// Configuration for the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Arctangent form used for the phase angle.
    pub phase_convention: PhaseConvention,
    /// Number of samples per period produced by [`CircuitSolver::sample_waveform`].
    pub waveform_points: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            phase_convention: PhaseConvention::default(),
            waveform_points: DEFAULT_WAVEFORM_POINTS,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phase angle convention.
    ///
    /// - `Quadrant` (default): two-argument arctangent, correct for any sign of R
    /// - `Principal`: single-argument arctangent, matches legacy output for R < 0
    pub fn with_phase_convention(mut self, phase_convention: PhaseConvention) -> Self {
        self.phase_convention = phase_convention;
        self
    }

    /// Set the number of waveform samples per period.
    pub fn with_waveform_points(mut self, waveform_points: usize) -> Self {
        self.waveform_points = waveform_points;
        self
    }
}

/// Stateless series RLC solver.
///
/// Holds only its configuration, so one instance can serve any number of
/// solves, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircuitSolver {
    config: SolverConfig,
}

impl CircuitSolver {
    /// Create a new solver with default configuration.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Create a new solver with custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute the full solution record for `params`.
    pub fn solve(&self, params: &CircuitParameters) -> Result<SolutionRecord> {
        SolutionRecord::compute(params, self.config.phase_convention)
    }

    /// Sample one period using the configured number of points.
    pub fn sample_waveform(
        &self,
        params: &CircuitParameters,
        solution: &SolutionRecord,
    ) -> Result<Waveform> {
        Waveform::new(params, solution, self.config.waveform_points)
    }

    /// Voltage and current phasors of a solved circuit.
    pub fn phasor_vectors(&self, solution: &SolutionRecord) -> PhasorPair {
        PhasorPair::from_solution(solution)
    }

    /// Power triangle of a solved circuit.
    pub fn power_triangle(&self, solution: &SolutionRecord) -> PowerTriangle {
        PowerTriangle::from_solution(solution)
    }
}
