use crate::field::{ColumnType, Field};
use crate::model::TableMeta;
use crate::{Error, Result};
use itertools::Itertools;
use serde::Serialize;

/// Check that a mapping table is well formed: every field names a non-empty
/// column, no column or field appears twice, and the primary key (if any) is
/// one of the mapped columns.
pub fn validate<T: TableMeta>() -> Result<()> {
    let table = T::table_name();
    let fields = T::fields();
    if let Some(f) = fields.iter().find(|f| f.column.trim().is_empty()) {
        return Err(Error::EmptyColumnName { table, field: f.ident });
    }
    if let Some(column) = fields.iter().map(|f| f.column).duplicates().next() {
        return Err(Error::DuplicateColumn { table, column });
    }
    if let Some(field) = fields.iter().map(|f| f.ident).duplicates().next() {
        return Err(Error::DuplicateField { table, field });
    }
    if let Some(pkey) = T::primary_key() {
        if !fields.iter().any(|f| f.column == pkey) {
            return Err(Error::UnknownPrimaryKey { table, column: pkey });
        }
    }
    tracing::debug!(table, columns = fields.len(), "Mapping is valid");
    Ok(())
}

/// Check that the mapped column set is exactly `expected`, ignoring order.
pub fn expect_columns<T: TableMeta>(expected: &[&str]) -> Result<()> {
    let actual = T::table_columns();
    let missing = expected
        .iter()
        .filter(|c| !actual.iter().any(|a| a == *c))
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    let unexpected = actual
        .iter()
        .filter(|a| !expected.iter().any(|c| c == *a))
        .map(|c| c.to_string())
        .collect::<Vec<_>>();
    if missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }
    Err(Error::ColumnSetMismatch {
        table: T::table_name(),
        missing,
        unexpected,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnDescription {
    pub field: &'static str,
    pub column: &'static str,
    #[serde(rename = "type")]
    pub ty: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableDescription {
    pub table: &'static str,
    pub columns: Vec<ColumnDescription>,
}

pub fn describe<T: TableMeta>() -> TableDescription {
    let pkey = T::primary_key();
    let columns = T::fields()
        .iter()
        .map(|f: &Field| ColumnDescription {
            field: f.ident,
            column: f.column,
            ty: f.ty,
            nullable: f.nullable,
            primary_key: pkey == Some(f.column),
        })
        .collect();
    TableDescription {
        table: T::table_name(),
        columns,
    }
}
