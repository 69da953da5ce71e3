use crate::value::{FromValue, IntoValue, Value};
use crate::Result;
use indexmap::{map::Iter, IndexMap};
use serde::{Deserialize, Serialize};

/// A row keyed by column name. Column order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(IndexMap<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl IntoValue) -> Option<Value> {
        self.0.insert(column.into(), value.into_value())
    }

    /// Builder form of [`Row::insert`].
    pub fn with(mut self, column: impl Into<String>, value: impl IntoValue) -> Self {
        self.insert(column, value);
        self
    }

    pub fn value(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    /// Read a column. An absent column is an error unless `T` is an `Option`.
    pub fn get<T: FromValue>(&self, column: &str) -> Result<T> {
        match self.0.get(column) {
            Some(value) => T::from_value(column, value),
            None => T::absent(column),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }
}
