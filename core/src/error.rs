use crate::field::ColumnType;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    SqlxError(#[from] sqlx::Error),

    #[error("field `{field}` on table `{table}` has an empty column name")]
    EmptyColumnName { table: &'static str, field: &'static str },

    #[error("column `{column}` on table `{table}` is mapped by more than one field")]
    DuplicateColumn { table: &'static str, column: &'static str },

    #[error("field `{field}` on table `{table}` is declared more than once")]
    DuplicateField { table: &'static str, field: &'static str },

    #[error("primary key `{column}` is not a mapped column of table `{table}`")]
    UnknownPrimaryKey { table: &'static str, column: &'static str },

    #[error("column set of table `{table}` does not match: missing {missing:?}, unexpected {unexpected:?}")]
    ColumnSetMismatch {
        table: &'static str,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("row has no column `{0}`")]
    MissingColumn(String),

    #[error("column `{column}` is not mapped by table `{table}`")]
    UnknownColumn { table: &'static str, column: String },

    #[error("column `{0}` is null, but the field is not nullable")]
    UnexpectedNull(String),

    #[error("column `{column}` expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        found: &'static str,
    },

    #[error("column `{column}` value {value} does not fit in {target}")]
    OutOfRange {
        column: String,
        value: i64,
        target: &'static str,
    },
}
