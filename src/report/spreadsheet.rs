//! CSV output for spreadsheet applications.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::solver::{SolutionRecord, Waveform};

use super::{rows, save_with};

/// Default file name for the results table.
pub const DEFAULT_SPREADSHEET_PATH: &str = "rlc_results.csv";

/// Write the results as a two-column table at full precision.
///
/// Format:
/// ```csv
/// Quantity,Value
/// ω (rad/s),314.1592653589793
/// XL (Ω),31.41592653589793
/// ```
pub fn write_spreadsheet<W: Write>(solution: &SolutionRecord, writer: &mut W) -> Result<()> {
    writeln!(writer, "Quantity,Value")?;
    for (label, value) in rows(solution) {
        writeln!(writer, "{},{}", label, value)?;
    }
    Ok(())
}

/// Write the results table to `path`.
pub fn save_spreadsheet(solution: &SolutionRecord, path: &Path) -> Result<()> {
    let _span = tracing::info_span!("save_spreadsheet", path = %path.display()).entered();
    save_with(path, |w| write_spreadsheet(solution, w))?;
    tracing::debug!("results table written");
    Ok(())
}

/// Write sampled waveforms for plotting.
///
/// Format:
/// ```csv
/// t,v,i
/// 0,0,-3.147
/// ```
pub fn write_waveform_csv<W: Write>(waveform: &Waveform, writer: &mut W) -> Result<()> {
    writeln!(writer, "t,v,i")?;
    for sample in waveform {
        writeln!(writer, "{},{},{}", sample.t, sample.voltage, sample.current)?;
    }
    Ok(())
}

/// Write sampled waveforms to `path`.
pub fn save_waveform_csv(waveform: &Waveform, path: &Path) -> Result<()> {
    let _span = tracing::info_span!("save_waveform", path = %path.display(), points = waveform.len())
        .entered();
    save_with(path, |w| write_waveform_csv(waveform, w))?;
    tracing::debug!("waveform data written");
    Ok(())
}
