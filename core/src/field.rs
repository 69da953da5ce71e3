use serde::Serialize;
use std::fmt;

/// Storage affinity of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnType {
    Integer,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => f.write_str("INTEGER"),
            ColumnType::Text => f.write_str("TEXT"),
        }
    }
}

/// A field tag: ties one struct field to the column it is stored in.
///
/// Tags are meant to be built in `const` context and collected into a
/// `&'static [Field]` next to the struct they describe:
///
/// ```ignore
/// static FIELDS: [Field; 2] = [
///     Field::new("id", "_id", ColumnType::Integer),
///     Field::new("age", "age", ColumnType::Integer).nullable(),
/// ];
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Identifier used in Rust to refer to the field
    pub ident: &'static str,
    /// Name of the column in the storage schema
    pub column: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
}

impl Field {
    pub const fn new(ident: &'static str, column: &'static str, ty: ColumnType) -> Self {
        Self {
            ident,
            column,
            ty,
            nullable: false,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
