//! Excel importer implementation - .xlsx byte buffer → typed records → database

use super::{count_header_columns, normalize_header};
use crate::convert::{cell_text, parse_cell};
use crate::db::{insert_all, ConnectionFactory};
use crate::error::{BridgeError, BridgeResult};
use crate::record::{FieldDescriptor, RecordDraft, SheetRecord};
use calamine::{Reader, Xlsx};
use std::collections::HashMap;
use std::io::Cursor;
use tracing::{debug, warn};

/// Why a workbook was rejected before any database contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The file must contain exactly one worksheet
    SheetCount(usize),
    /// A header cell matched no field of the target record type
    UnknownColumn(String),
}

/// Outcome of parsing a workbook without touching a database.
#[derive(Debug)]
pub enum ReadOutcome<T> {
    Accepted(Vec<T>),
    Rejected(Rejection),
}

/// Parse a `.xlsx` byte buffer into typed records.
///
/// The workbook must hold exactly one worksheet whose first row carries the
/// field names of `T` (spaces ignored, any column order). Validation
/// problems come back as [`ReadOutcome::Rejected`]; an unreadable workbook,
/// a missing header row, or a cell that fails its field's parse rule is an
/// error that aborts the whole read.
pub fn read_records<T: SheetRecord + 'static>(buffer: &[u8]) -> BridgeResult<ReadOutcome<T>> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(buffer))
        .map_err(|e| BridgeError::Excel(format!("Failed to open workbook: {}", e)))?;

    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.len() != 1 {
        return Ok(ReadOutcome::Rejected(Rejection::SheetCount(
            sheet_names.len(),
        )));
    }

    let range = workbook
        .worksheet_range(&sheet_names[0])
        .map_err(|e| BridgeError::Excel(format!("Failed to read worksheet: {}", e)))?;

    let (height, _) = range.get_size();
    if height == 0 {
        return Err(BridgeError::Excel(
            "worksheet has no header row".to_string(),
        ));
    }

    // Column mapping covers every counted header cell. The count stops at
    // the first empty cell, so a blank header hides everything to its right.
    let column_count = count_header_columns(&range);
    let mut mapping: Vec<(usize, String)> = Vec::with_capacity(column_count);
    for col in 0..column_count {
        let text = range.get((0, col)).map(cell_text).unwrap_or_default();
        mapping.push((col, normalize_header(&text)));
    }

    let by_name: HashMap<&str, &FieldDescriptor<T>> =
        T::fields().iter().map(|f| (f.name, f)).collect();

    for (_, name) in &mapping {
        if !by_name.contains_key(name.as_str()) {
            warn!(
                "header `{}` matches no field of table `{}`",
                name,
                T::table()
            );
            return Ok(ReadOutcome::Rejected(Rejection::UnknownColumn(
                name.clone(),
            )));
        }
    }

    // Data rows, in sheet order. Unmapped fields stay absent from the
    // draft; `from_draft` decides whether that is tolerable.
    let mut records = Vec::new();
    for row in range.rows().skip(1) {
        let mut draft = RecordDraft::new();
        for (col, name) in &mapping {
            let field = by_name[name.as_str()];
            let text = row.get(*col).map(cell_text).unwrap_or_default();
            let value = parse_cell(&text, field.kind, field.nullable)?;
            draft.set(field.name, value);
        }
        records.push(T::from_draft(&mut draft)?);
    }

    debug!(
        "parsed {} rows from sheet `{}` for table `{}`",
        records.len(),
        sheet_names[0],
        T::table()
    );

    Ok(ReadOutcome::Accepted(records))
}

/// Parse a `.xlsx` byte buffer and bulk-insert its rows into the database.
///
/// Returns `Ok(false)` for the two validation rejections (sheet count,
/// unknown header) without opening a connection; `Ok(true)` once every row
/// is parsed and inserted. Parse and database failures are errors. The
/// insert runs in a single transaction, so a failing row leaves the table
/// untouched.
pub fn import_records<T, F>(factory: &F, buffer: &[u8]) -> BridgeResult<bool>
where
    T: SheetRecord + 'static,
    F: ConnectionFactory,
{
    let records = match read_records::<T>(buffer)? {
        ReadOutcome::Rejected(rejection) => {
            warn!("import into `{}` rejected: {:?}", T::table(), rejection);
            return Ok(false);
        }
        ReadOutcome::Accepted(records) => records,
    };

    let mut conn = factory.open()?;
    let inserted = insert_all(&mut conn, &records)?;
    debug!("inserted {} rows into `{}`", inserted, T::table());

    Ok(true)
}
