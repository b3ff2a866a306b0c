//! Excel exporter implementation - records → .xlsx byte buffer

use super::display_header;
use crate::error::{BridgeError, BridgeResult};
use crate::record::SheetRecord;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use tracing::debug;

/// Export a record slice to a single-worksheet `.xlsx` buffer.
///
/// Columns follow the record type's field declaration order. Row 1 is the
/// styled header row; each record occupies one row below it, cells written
/// as display text. Null values leave their cell unwritten. An empty slice
/// produces a header-only sheet.
pub fn export_records<T: SheetRecord + 'static>(sheet_name: &str, records: &[T]) -> BridgeResult<Vec<u8>> {
    let fields = T::fields();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| BridgeError::Excel(format!("Failed to set worksheet name: {}", e)))?;

    let header_format = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_align(FormatAlign::Center)
        .set_background_color(Color::RGB(0xD3D3D3));

    // Header row (row 0): humanized field names in declaration order
    for (col_idx, field) in fields.iter().enumerate() {
        worksheet
            .write_string_with_format(
                0,
                col_idx as u16,
                display_header(field.name)?,
                &header_format,
            )
            .map_err(|e| BridgeError::Excel(format!("Failed to write header: {}", e)))?;
    }

    // Data rows (row 1 onward), records in input order
    for (row_idx, record) in records.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;

        for (col_idx, field) in fields.iter().enumerate() {
            let value = (field.get)(record);
            if value.is_null() {
                continue;
            }
            worksheet
                .write_string(excel_row, col_idx as u16, value.display())
                .map_err(|e| BridgeError::Excel(format!("Failed to write cell: {}", e)))?;
        }
    }

    worksheet.autofit();

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| BridgeError::Excel(format!("Failed to serialize workbook: {}", e)))?;

    debug!(
        "exported {} rows x {} columns to sheet `{}` ({} bytes)",
        records.len(),
        fields.len(),
        sheet_name,
        buffer.len()
    );

    Ok(buffer)
}
