//! `.xlsx` workbook output.
//!
//! One worksheet with a bold `Quantity | Value` header and one row per
//! quantity, values stored as numbers at full precision.

use std::fs;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::{RlcError, Result};
use crate::solver::SolutionRecord;

use super::rows;

/// Default file name for the results workbook.
pub const DEFAULT_WORKBOOK_PATH: &str = "rlc_results.xlsx";

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Results";

/// Build the workbook in memory and return the encoded file.
pub fn write_workbook(solution: &SolutionRecord) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.write_string_with_format(0, 0, "Quantity", &header)?;
    sheet.write_string_with_format(0, 1, "Value", &header)?;

    for (i, (label, value)) in rows(solution).into_iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, label)?;
        // Excel cells cannot hold NaN or infinities
        if value.is_finite() {
            sheet.write_number(row, 1, value)?;
        } else {
            sheet.write_string(row, 1, value.to_string())?;
        }
    }
    sheet.set_column_width(0, 14)?;
    sheet.set_column_width(1, 22)?;

    Ok(workbook.save_to_buffer()?)
}

/// Write the results workbook to `path`.
pub fn save_workbook(solution: &SolutionRecord, path: &Path) -> Result<()> {
    let _span = tracing::info_span!("save_workbook", path = %path.display()).entered();
    let bytes = write_workbook(solution)?;
    fs::write(path, &bytes).map_err(|e| RlcError::file_write(path, e))?;
    tracing::debug!(bytes = bytes.len(), "results workbook written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::CircuitParameters;
    use crate::solver;

    #[test]
    fn test_workbook_is_zip_container() {
        let solution = solver::solve(&CircuitParameters::default()).unwrap();
        let bytes = write_workbook(&solution).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_workbook_lossless_near_resonance() {
        let params = CircuitParameters::new(0.0, 0.1, 1.0 / (0.1 * 4.0), 1.0 / std::f64::consts::PI, 1.0)
            .unwrap();
        let solution = solver::solve(&params).unwrap();
        assert!(write_workbook(&solution).unwrap().starts_with(b"PK"));
    }

    #[test]
    fn test_save_workbook_bad_path() {
        let solution = solver::solve(&CircuitParameters::default()).unwrap();
        let path = Path::new("/nonexistent-dir/rlc_results.xlsx");
        assert!(matches!(
            save_workbook(&solution, path),
            Err(RlcError::FileWriteError { .. })
        ));
    }
}
