use crate::field::ColumnType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single column value, as read from or written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Integer(_) => "INTEGER",
            Value::Text(_) => "TEXT",
        }
    }

    /// Whether a non-null value can be stored in a column of type `ty`.
    pub fn fits(&self, ty: ColumnType) -> bool {
        matches!(
            (self, ty),
            (Value::Null, _) | (Value::Integer(_), ColumnType::Integer) | (Value::Text(_), ColumnType::Text)
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Conversion out of a column value into a field's Rust type.
pub trait FromValue: Sized {
    fn from_value(column: &str, value: &Value) -> Result<Self>;

    /// Called when the row has no such column at all.
    fn absent(column: &str) -> Result<Self> {
        Err(Error::MissingColumn(column.to_string()))
    }
}

/// Conversion of a field's Rust type into a column value.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

fn mismatch(column: &str, expected: ColumnType, value: &Value) -> Error {
    if value.is_null() {
        return Error::UnexpectedNull(column.to_string());
    }
    Error::TypeMismatch {
        column: column.to_string(),
        expected,
        found: value.kind(),
    }
}

impl FromValue for i64 {
    fn from_value(column: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(*i),
            other => Err(mismatch(column, ColumnType::Integer, other)),
        }
    }
}

impl FromValue for i32 {
    fn from_value(column: &str, value: &Value) -> Result<Self> {
        let wide = i64::from_value(column, value)?;
        i32::try_from(wide).map_err(|_| Error::OutOfRange {
            column: column.to_string(),
            value: wide,
            target: "i32",
        })
    }
}

impl FromValue for String {
    fn from_value(column: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(mismatch(column, ColumnType::Text, other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(column: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(column, other).map(Some),
        }
    }

    fn absent(_column: &str) -> Result<Self> {
        Ok(None)
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::Integer(self)
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::Integer(self.into())
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Text(self.to_string())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        self.map_or(Value::Null, IntoValue::into_value)
    }
}
