//! Plain-text results document.
//!
//! Format:
//! ```text
//! RLC AC circuit analysis results
//! ω (rad/s): 314.16
//! XL (Ω): 31.42
//! ...
//! ```

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::solver::SolutionRecord;

use super::{rows, save_with};

/// Title line of the results document.
pub const DOCUMENT_TITLE: &str = "RLC AC circuit analysis results";

/// Default file name for the results document.
pub const DEFAULT_DOCUMENT_PATH: &str = "rlc_results.txt";

/// Write the document: a title line then one `label: value` line per quantity,
/// values rounded to two decimals.
pub fn write_document<W: Write>(solution: &SolutionRecord, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", DOCUMENT_TITLE)?;
    for (label, value) in rows(solution) {
        writeln!(writer, "{}: {:.2}", label, value)?;
    }
    Ok(())
}

/// Write the document to `path`, replacing any existing file.
pub fn save_document(solution: &SolutionRecord, path: &Path) -> Result<()> {
    let _span = tracing::info_span!("save_document", path = %path.display()).entered();
    save_with(path, |w| write_document(solution, w))?;

    tracing::debug!("results document written");
    Ok(())
}
