//! Time-domain voltage and current over one period of the source.
//!
//! The source voltage is v(t) = V·sin(ωt) and the steady-state current is
//! i(t) = I·sin(ωt − φ). A [`Waveform`] describes a sampling of both over
//! [0, 1/f) and is evaluated lazily: iterating it twice yields the same
//! samples, and nothing is cached between iterations.

use serde::Serialize;

use crate::circuit::CircuitParameters;
use crate::error::{RlcError, Result};

use super::SolutionRecord;

/// One point of the sampled waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveformSample {
    /// Time (s)
    pub t: f64,
    /// Source voltage v(t) (V)
    pub voltage: f64,
    /// Circuit current i(t) (A)
    pub current: f64,
}

/// A lazily evaluated, restartable sampling of one source period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waveform {
    voltage: f64,
    current: f64,
    omega: f64,
    phase: f64,
    period: f64,
    num_points: usize,
}

impl Waveform {
    /// Describe `num_points` evenly spaced samples over one period.
    ///
    /// Sample `k` is taken at t = k·T/n, so the end of the period is excluded.
    pub fn new(
        params: &CircuitParameters,
        solution: &SolutionRecord,
        num_points: usize,
    ) -> Result<Self> {
        if num_points == 0 {
            return Err(RlcError::invalid_parameter(
                "num_points",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            voltage: params.voltage(),
            current: solution.current(),
            omega: solution.omega(),
            phase: solution.phase(),
            period: params.period(),
            num_points,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.num_points
    }

    /// Always false; an empty waveform cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    /// Sampling interval (s).
    pub fn time_step(&self) -> f64 {
        self.period / self.num_points as f64
    }

    /// Evaluate both waveforms at an arbitrary time.
    pub fn at(&self, t: f64) -> WaveformSample {
        let wt = self.omega * t;
        WaveformSample {
            t,
            voltage: self.voltage * wt.sin(),
            current: self.current * (wt - self.phase).sin(),
        }
    }

    /// Get the `index`-th sample, or `None` past the end.
    pub fn sample(&self, index: usize) -> Option<WaveformSample> {
        if index >= self.num_points {
            return None;
        }
        Some(self.at(index as f64 * self.time_step()))
    }

    /// Iterate the samples from t = 0.
    pub fn iter(&self) -> WaveformIter {
        WaveformIter {
            waveform: *self,
            index: 0,
        }
    }
}

impl IntoIterator for Waveform {
    type Item = WaveformSample;
    type IntoIter = WaveformIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Waveform {
    type Item = WaveformSample;
    type IntoIter = WaveformIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`Waveform`].
#[derive(Debug, Clone)]
pub struct WaveformIter {
    waveform: Waveform,
    index: usize,
}

impl Iterator for WaveformIter {
    type Item = WaveformSample;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.waveform.sample(self.index)?;
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.waveform.num_points.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WaveformIter {}

impl std::iter::FusedIterator for WaveformIter {}
