//! A model is a struct whose fields are stored in the columns of one table.
//!
//! There is no derive: a model implements these traits by hand, declaring its
//! mapping table as a `static` slice of [`Field`] tags next to the struct.
//!
//!  - `TableMeta` carries the mapping table itself (table name, field tags,
//!    primary key).
//!  - `Entity` binds a [`Row`] to the struct and back, looking every column
//!    name up through the mapping table.
use crate::field::Field;
use crate::row::Row;
use crate::Result;

pub trait TableMeta {
    fn table_name() -> &'static str;

    /// The mapping table. One tag per field, in declaration order.
    fn fields() -> &'static [Field];

    fn primary_key() -> Option<&'static str> {
        None
    }

    /// All mapped column names, in field order.
    fn table_columns() -> Vec<&'static str> {
        Self::fields().iter().map(|f| f.column).collect()
    }

    fn column_for(ident: &str) -> Option<&'static str> {
        Self::fields().iter().find(|f| f.ident == ident).map(|f| f.column)
    }

    fn field_for(column: &str) -> Option<&'static Field> {
        Self::fields().iter().find(|f| f.column == column)
    }
}

pub trait Entity: TableMeta + Sized {
    fn from_row(row: &Row) -> Result<Self>;

    fn to_row(&self) -> Row;
}
