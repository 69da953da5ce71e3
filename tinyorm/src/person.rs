use crate::contract::person::{COLUMN_AGE, COLUMN_EMAIL, COLUMN_ID, COLUMN_NAME, TABLE_NAME};
use tinyorm_core::model::{Entity, TableMeta};
use tinyorm_core::{ColumnType, Field, Result, Row};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

static FIELDS: [Field; 4] = [
    Field::new("id", COLUMN_ID, ColumnType::Integer),
    Field::new("name", COLUMN_NAME, ColumnType::Text),
    Field::new("email", COLUMN_EMAIL, ColumnType::Text),
    Field::new("age", COLUMN_AGE, ColumnType::Integer).nullable(),
];

impl TableMeta for Person {
    fn table_name() -> &'static str {
        TABLE_NAME
    }

    fn fields() -> &'static [Field] {
        &FIELDS
    }

    fn primary_key() -> Option<&'static str> {
        Some(COLUMN_ID)
    }
}

impl Entity for Person {
    fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: row.get(COLUMN_ID)?,
            name: row.get(COLUMN_NAME)?,
            email: row.get(COLUMN_EMAIL)?,
            age: row.get(COLUMN_AGE)?,
        })
    }

    fn to_row(&self) -> Row {
        Row::new()
            .with(COLUMN_ID, self.id)
            .with(COLUMN_NAME, self.name.as_str())
            .with(COLUMN_EMAIL, self.email.as_str())
            .with(COLUMN_AGE, self.age)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for Person {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        let row = tinyorm_core::binding::row_from_sqlite::<Self>(row).map_err(into_sqlx)?;
        <Self as Entity>::from_row(&row).map_err(into_sqlx)
    }
}

#[cfg(feature = "sqlite")]
fn into_sqlx(e: tinyorm_core::Error) -> sqlx::Error {
    tracing::debug!(table = TABLE_NAME, error = %e, "Failed to bind row");
    match e {
        tinyorm_core::Error::SqlxError(e) => e,
        e => sqlx::Error::Decode(Box::new(e)),
    }
}
