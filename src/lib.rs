//! Sheetbridge - a two-way bridge between .xlsx workbooks and typed records
//!
//! This library exports a record collection to a styled, single-worksheet
//! Excel buffer, and imports such a buffer back into a database table by
//! matching header cells to record field names.
//!
//! # Features
//!
//! - Declaration-ordered export with humanized, styled headers
//! - Order-independent column matching on import
//! - Explicit per-kind text parsing (no reflection, no silent defaults)
//! - Transactional SQLite bulk insert behind a connection-factory trait
//!
//! # Example
//!
//! ```no_run
//! use sheetbridge::{
//!     export_records, import_records, BridgeResult, FieldDescriptor, FieldKind, FieldValue,
//!     RecordDraft, SheetRecord, SqliteFactory,
//! };
//!
//! struct Contact {
//!     name: String,
//! }
//!
//! impl SheetRecord for Contact {
//!     fn table() -> &'static str {
//!         "contacts"
//!     }
//!
//!     fn fields() -> &'static [FieldDescriptor<Self>] {
//!         static FIELDS: &[FieldDescriptor<Contact>] = &[FieldDescriptor {
//!             name: "Name",
//!             kind: FieldKind::Text,
//!             nullable: false,
//!             get: |c| FieldValue::Text(c.name.clone()),
//!         }];
//!         FIELDS
//!     }
//!
//!     fn from_draft(draft: &mut RecordDraft) -> BridgeResult<Self> {
//!         Ok(Contact {
//!             name: draft.take_text("Name")?,
//!         })
//!     }
//! }
//!
//! let contacts = vec![Contact {
//!     name: "Ada".to_string(),
//! }];
//! let buffer = export_records("Contacts", &contacts)?;
//!
//! let factory = SqliteFactory::new("contacts.db");
//! let inserted = import_records::<Contact, _>(&factory, &buffer)?;
//! assert!(inserted);
//! # Ok::<(), sheetbridge::BridgeError>(())
//! ```

pub mod convert;
pub mod db;
pub mod error;
pub mod excel;
pub mod record;

// Re-export commonly used types
pub use db::{insert_all, ConnectionFactory, SqliteFactory};
pub use error::{BridgeError, BridgeResult};
pub use excel::{export_records, import_records, read_records, ReadOutcome, Rejection};
pub use record::{FieldDescriptor, FieldKind, FieldValue, RecordDraft, SheetRecord};
