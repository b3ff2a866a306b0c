//! Text ↔ typed value conversion.
//!
//! Worksheet cells travel as display text; this module owns the explicit
//! parser table that turns that text into [`FieldValue`]s, one rule per
//! [`FieldKind`]. Parse failures are errors, never silent defaults.

use crate::error::{BridgeError, BridgeResult};
use crate::record::{FieldKind, FieldValue};
use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};

/// Parse one cell's display text into a typed value.
///
/// Empty text resolves to `Null` for nullable fields and to the empty string
/// for non-nullable text fields; for any other non-nullable kind it is a
/// conversion error.
pub fn parse_cell(text: &str, kind: FieldKind, nullable: bool) -> BridgeResult<FieldValue> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        if nullable {
            return Ok(FieldValue::Null);
        }
        if kind == FieldKind::Text {
            return Ok(FieldValue::Text(String::new()));
        }
        return Err(BridgeError::Convert(format!(
            "empty cell for non-nullable {:?} field",
            kind
        )));
    }

    match kind {
        FieldKind::Text => Ok(FieldValue::Text(text.to_string())),
        FieldKind::Integer => trimmed
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|e| BridgeError::Convert(format!("'{}' is not an integer: {}", trimmed, e))),
        FieldKind::Float => trimmed
            .parse::<f64>()
            .map(FieldValue::Float)
            .map_err(|e| BridgeError::Convert(format!("'{}' is not a number: {}", trimmed, e))),
        FieldKind::Boolean => trimmed
            .to_ascii_lowercase()
            .parse::<bool>()
            .map(FieldValue::Boolean)
            .map_err(|_| BridgeError::Convert(format!("'{}' is not a boolean", trimmed))),
        FieldKind::Date => parse_date(trimmed)
            .map(FieldValue::Date)
            .ok_or_else(|| BridgeError::Convert(format!("'{}' is not a date", trimmed))),
    }
}

/// ISO date, with datetime fallbacks for cells that carry a time component.
fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

/// Display text for a calamine cell.
///
/// Datetime cells render as ISO text so they line up with the `Date` parse
/// rules; everything else follows the cell's natural text form.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) if ndt.time() == chrono::NaiveTime::MIN => {
                ndt.format("%Y-%m-%d").to_string()
            }
            Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}
