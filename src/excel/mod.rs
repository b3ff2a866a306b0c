//! Excel import/export module.
//!
//! Bidirectional `.xlsx` ↔ typed record conversion:
//! - Export: record slice → styled single-worksheet byte buffer
//! - Import: byte buffer → typed records → database bulk insert

mod exporter;
mod importer;

pub use exporter::export_records;
pub use importer::{import_records, read_records, ReadOutcome, Rejection};

use crate::convert::cell_text;
use crate::error::{BridgeError, BridgeResult};
use calamine::{Data, Range};
use regex::Regex;

/// Number of header columns: filled cells in the first row, scanned
/// left-to-right until the first empty cell. A blank header cell truncates
/// the detected width, so anything to its right is ignored.
pub(crate) fn count_header_columns(range: &Range<Data>) -> usize {
    let (_, width) = range.get_size();

    let mut count = 0;
    for col in 0..width {
        let filled = range
            .get((0, col))
            .map(|cell| !cell_text(cell).is_empty())
            .unwrap_or(false);
        if !filled {
            break;
        }
        count += 1;
    }
    count
}

/// Human-readable header for a field name: insert a space before each
/// internal capital letter ("OrderDate" → "Order Date").
pub(crate) fn display_header(field_name: &str) -> BridgeResult<String> {
    let pattern = Regex::new(r"(\B[A-Z])")
        .map_err(|e| BridgeError::Excel(format!("Regex error: {}", e)))?;
    Ok(pattern.replace_all(field_name, " $1").into_owned())
}

/// Inverse of [`display_header`] for matching: drop spaces, trim the rest.
pub(crate) fn normalize_header(cell_value: &str) -> String {
    cell_value.replace(' ', "").trim().to_string()
}
