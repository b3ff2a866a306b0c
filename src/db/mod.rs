//! Database layer: connection factory and transactional bulk insert.

use crate::error::BridgeResult;
use crate::record::{FieldValue, SheetRecord};
use rusqlite::types::{ToSqlOutput, Value};
use rusqlite::{Connection, ToSql};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Capability that opens a database connection on demand.
///
/// The importer acquires a connection only after a workbook passes
/// validation, uses it for one bulk insert, and drops it before returning.
pub trait ConnectionFactory {
    fn open(&self) -> BridgeResult<Connection>;
}

/// File-backed SQLite factory.
pub struct SqliteFactory {
    path: PathBuf,
}

impl SqliteFactory {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConnectionFactory for SqliteFactory {
    fn open(&self) -> BridgeResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            FieldValue::Text(s) => s.to_sql(),
            FieldValue::Integer(i) => i.to_sql(),
            FieldValue::Float(f) => f.to_sql(),
            FieldValue::Boolean(b) => b.to_sql(),
            FieldValue::Date(d) => d.to_sql(),
            FieldValue::Null => Ok(ToSqlOutput::Owned(Value::Null)),
        }
    }
}

/// Insert every record into `T::table()` inside a single transaction.
///
/// One prepared statement, one `execute` per record, commit at the end.
/// Any failure rolls the whole batch back. Returns the inserted row count.
pub fn insert_all<T: SheetRecord + 'static>(conn: &mut Connection, records: &[T]) -> BridgeResult<usize> {
    let fields = T::fields();
    let columns: Vec<&str> = fields.iter().map(|f| f.name).collect();
    let placeholders: Vec<String> = (1..=fields.len()).map(|i| format!("?{}", i)).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        T::table(),
        columns.join(", "),
        placeholders.join(", ")
    );

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&sql)?;
        for record in records {
            let values: Vec<FieldValue> = fields.iter().map(|f| (f.get)(record)).collect();
            stmt.execute(rusqlite::params_from_iter(values))?;
        }
    }
    tx.commit()?;

    debug!("committed {} rows into `{}`", records.len(), T::table());
    Ok(records.len())
}
