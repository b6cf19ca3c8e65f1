//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows and values into JSON rows.
//! These are testable in isolation without database access.

use formdesk_core::storage::Row;
use rusqlite::types::{Type, ValueRef};
use serde_json::{Number, Value};

/// Convert a SQLite row to a JSON row keyed by column name.
///
/// `columns` must be the statement's column names, in order.
pub fn row_to_json(row: &rusqlite::Row, columns: &[String]) -> rusqlite::Result<Row> {
    let mut out = Row::new();
    for (idx, name) in columns.iter().enumerate() {
        let value = value_ref_to_json(row.get_ref(idx)?)
            .ok_or(rusqlite::Error::InvalidColumnType(idx, name.clone(), Type::Real))?;
        out.insert(name.clone(), value);
    }
    Ok(out)
}

/// Convert a single SQLite value to JSON.
///
/// Returns `None` for real values JSON cannot represent (NaN, infinities).
pub fn value_ref_to_json(value: ValueRef<'_>) -> Option<Value> {
    match value {
        ValueRef::Null => Some(Value::Null),
        ValueRef::Integer(i) => Some(Value::from(i)),
        ValueRef::Real(f) => Number::from_f64(f).map(Value::Number),
        ValueRef::Text(bytes) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Blob(bytes) => Some(Value::String(String::from_utf8_lossy(bytes).into_owned())),
    }
}
