//! Presentation and export of solved circuits.
//!
//! Every function here takes a finished [`SolutionRecord`], so results can
//! only be exported after a solve has succeeded.
//!
//! - [`steps`] - the step-by-step derivation shown to the user
//! - [`document`] - plain-text results document
//! - [`spreadsheet`] - two-column CSV table and waveform data
//! - [`workbook`] - the same table as an `.xlsx` workbook
//! - [`json`] - machine-readable record

pub mod document;
pub mod json;
pub mod spreadsheet;
pub mod workbook;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{RlcError, Result};
use crate::solver::SolutionRecord;

/// One labelled entry of a solution record, in derivation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    AngularFrequency,
    InductiveReactance,
    CapacitiveReactance,
    Impedance,
    PhaseAngle,
    Current,
    ApparentPower,
    RealPower,
    ReactivePower,
}

impl Quantity {
    /// All quantities in the order they are derived.
    pub const ALL: [Quantity; 9] = [
        Quantity::AngularFrequency,
        Quantity::InductiveReactance,
        Quantity::CapacitiveReactance,
        Quantity::Impedance,
        Quantity::PhaseAngle,
        Quantity::Current,
        Quantity::ApparentPower,
        Quantity::RealPower,
        Quantity::ReactivePower,
    ];

    /// Symbol with its display unit.
    pub fn label(&self) -> &'static str {
        match self {
            Quantity::AngularFrequency => "ω (rad/s)",
            Quantity::InductiveReactance => "XL (Ω)",
            Quantity::CapacitiveReactance => "XC (Ω)",
            Quantity::Impedance => "Z (Ω)",
            Quantity::PhaseAngle => "φ (°)",
            Quantity::Current => "I (A)",
            Quantity::ApparentPower => "S (VA)",
            Quantity::RealPower => "P (W)",
            Quantity::ReactivePower => "Q (VAR)",
        }
    }

    /// Value in display units (the phase angle in degrees).
    pub fn value(&self, solution: &SolutionRecord) -> f64 {
        match self {
            Quantity::AngularFrequency => solution.omega(),
            Quantity::InductiveReactance => solution.inductive_reactance(),
            Quantity::CapacitiveReactance => solution.capacitive_reactance(),
            Quantity::Impedance => solution.impedance(),
            Quantity::PhaseAngle => solution.phase_degrees(),
            Quantity::Current => solution.current(),
            Quantity::ApparentPower => solution.apparent_power(),
            Quantity::RealPower => solution.real_power(),
            Quantity::ReactivePower => solution.reactive_power(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label/value rows of a record in derivation order.
pub fn rows(solution: &SolutionRecord) -> Vec<(&'static str, f64)> {
    Quantity::ALL
        .iter()
        .map(|q| (q.label(), q.value(solution)))
        .collect()
}

/// The derivation as numbered lines, e.g. `Step 1: ω (rad/s) = 314.16`.
pub fn steps(solution: &SolutionRecord) -> Vec<String> {
    rows(solution)
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| format!("Step {}: {} = {:.2}", i + 1, label, value))
        .collect()
}

/// Write the numbered derivation, one step per line.
pub fn write_steps<W: Write>(solution: &SolutionRecord, writer: &mut W) -> Result<()> {
    for line in steps(solution) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Create `path` and run `write` against a buffered writer for it.
///
/// Any I/O failure, including one in the middle of `write`, is reported
/// against `path`.
pub(crate) fn save_with<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = File::create(path).map_err(|e| RlcError::file_write(path, e))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(|e| match e {
        RlcError::Io(source) => RlcError::file_write(path, source),
        other => other,
    })?;
    writer.flush().map_err(|e| RlcError::file_write(path, e))
}
