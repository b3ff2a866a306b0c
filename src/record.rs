//! Record model: field descriptors, values, and row drafts.
//!
//! A record type participates in the bridge by implementing [`SheetRecord`]:
//! a declaration-ordered slice of [`FieldDescriptor`]s, a target table name,
//! and a finalizer that builds the record from a [`RecordDraft`] accumulated
//! while reading a worksheet row.

use crate::error::{BridgeError, BridgeResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

//==============================================================================
// Field kinds and values
//==============================================================================

/// Semantic type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
}

/// A single typed cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// ISO calendar date (no time component)
    Date(NaiveDate),
    /// Absent value; renders as an empty cell and inserts as SQL NULL
    Null,
}

impl FieldValue {
    /// Display text used for worksheet cells. `Null` renders empty.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Null => String::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

//==============================================================================
// Field descriptors
//==============================================================================

/// Compile-time accessor for one field of a record type.
///
/// `name` doubles as the worksheet header (after humanization) and the
/// database column name. `get` never fails; a nullable field with no value
/// returns [`FieldValue::Null`].
pub struct FieldDescriptor<T> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub nullable: bool,
    pub get: fn(&T) -> FieldValue,
}

/// A structured type that can cross the worksheet boundary in both
/// directions.
///
/// Implementations list their fields in declaration order; that order fixes
/// the exported column order and the insert column list.
pub trait SheetRecord: Sized {
    /// Database table receiving imported rows
    fn table() -> &'static str;

    /// Field descriptors in declaration order
    fn fields() -> &'static [FieldDescriptor<Self>];

    /// Finalize a draft into a record. Missing nullable fields resolve to
    /// `Null`; a missing non-nullable field is an error.
    fn from_draft(draft: &mut RecordDraft) -> BridgeResult<Self>;
}

//==============================================================================
// Record drafts
//==============================================================================

/// Name-keyed accumulator for one worksheet row.
///
/// The importer fills a draft from mapped cells, then hands it to
/// [`SheetRecord::from_draft`]. Takers remove values, so each field is
/// consumed at most once.
#[derive(Debug, Default)]
pub struct RecordDraft {
    values: HashMap<&'static str, FieldValue>,
}

impl RecordDraft {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn set(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    /// Remove and return a present, non-null value.
    fn take_required(&mut self, name: &str) -> BridgeResult<FieldValue> {
        match self.values.remove(name) {
            Some(FieldValue::Null) | None => Err(BridgeError::Field(format!(
                "missing value for non-nullable field '{}'",
                name
            ))),
            Some(value) => Ok(value),
        }
    }

    /// Remove a value, collapsing absence and `Null` to `None`.
    fn take_optional(&mut self, name: &str) -> Option<FieldValue> {
        match self.values.remove(name) {
            Some(FieldValue::Null) | None => None,
            Some(value) => Some(value),
        }
    }

    fn mismatch(name: &str, expected: FieldKind, got: &FieldValue) -> BridgeError {
        BridgeError::Field(format!(
            "field '{}' expected {:?}, got {:?}",
            name, expected, got
        ))
    }

    pub fn take_text(&mut self, name: &str) -> BridgeResult<String> {
        match self.take_required(name)? {
            FieldValue::Text(s) => Ok(s),
            other => Err(Self::mismatch(name, FieldKind::Text, &other)),
        }
    }

    pub fn take_integer(&mut self, name: &str) -> BridgeResult<i64> {
        match self.take_required(name)? {
            FieldValue::Integer(i) => Ok(i),
            other => Err(Self::mismatch(name, FieldKind::Integer, &other)),
        }
    }

    pub fn take_float(&mut self, name: &str) -> BridgeResult<f64> {
        match self.take_required(name)? {
            FieldValue::Float(f) => Ok(f),
            other => Err(Self::mismatch(name, FieldKind::Float, &other)),
        }
    }

    pub fn take_boolean(&mut self, name: &str) -> BridgeResult<bool> {
        match self.take_required(name)? {
            FieldValue::Boolean(b) => Ok(b),
            other => Err(Self::mismatch(name, FieldKind::Boolean, &other)),
        }
    }

    pub fn take_date(&mut self, name: &str) -> BridgeResult<NaiveDate> {
        match self.take_required(name)? {
            FieldValue::Date(d) => Ok(d),
            other => Err(Self::mismatch(name, FieldKind::Date, &other)),
        }
    }

    pub fn take_text_opt(&mut self, name: &str) -> BridgeResult<Option<String>> {
        match self.take_optional(name) {
            None => Ok(None),
            Some(FieldValue::Text(s)) => Ok(Some(s)),
            Some(other) => Err(Self::mismatch(name, FieldKind::Text, &other)),
        }
    }

    pub fn take_integer_opt(&mut self, name: &str) -> BridgeResult<Option<i64>> {
        match self.take_optional(name) {
            None => Ok(None),
            Some(FieldValue::Integer(i)) => Ok(Some(i)),
            Some(other) => Err(Self::mismatch(name, FieldKind::Integer, &other)),
        }
    }

    pub fn take_float_opt(&mut self, name: &str) -> BridgeResult<Option<f64>> {
        match self.take_optional(name) {
            None => Ok(None),
            Some(FieldValue::Float(f)) => Ok(Some(f)),
            Some(other) => Err(Self::mismatch(name, FieldKind::Float, &other)),
        }
    }

    pub fn take_boolean_opt(&mut self, name: &str) -> BridgeResult<Option<bool>> {
        match self.take_optional(name) {
            None => Ok(None),
            Some(FieldValue::Boolean(b)) => Ok(Some(b)),
            Some(other) => Err(Self::mismatch(name, FieldKind::Boolean, &other)),
        }
    }

    pub fn take_date_opt(&mut self, name: &str) -> BridgeResult<Option<NaiveDate>> {
        match self.take_optional(name) {
            None => Ok(None),
            Some(FieldValue::Date(d)) => Ok(Some(d)),
            Some(other) => Err(Self::mismatch(name, FieldKind::Date, &other)),
        }
    }
}
