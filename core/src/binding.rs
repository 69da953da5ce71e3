use crate::config::Config;
use crate::field::Field;
use crate::model::{Entity, TableMeta};
use crate::row::Row;
use crate::value::Value;
use crate::{Error, Result};

/// Bind one row to a model through its mapping table.
pub fn bind<T: Entity>(row: &Row, config: &Config) -> Result<T> {
    if config.strict {
        if let Some(column) = row.columns().find(|c| T::field_for(c).is_none()) {
            return Err(Error::UnknownColumn {
                table: T::table_name(),
                column: column.to_string(),
            });
        }
    }
    for field in T::fields() {
        if let Some(value) = row.value(field.column) {
            check_value(field, value)?;
        }
    }
    tracing::debug!(table = T::table_name(), columns = row.len(), "Binding row");
    T::from_row(row)
}

pub fn bind_all<'a, T, I>(rows: I, config: &Config) -> Result<Vec<T>>
where
    T: Entity,
    I: IntoIterator<Item = &'a Row>,
{
    rows.into_iter().map(|row| bind(row, config)).collect()
}

/// Check a value against a field's column type and nullability.
pub fn check_value(field: &Field, value: &Value) -> Result<()> {
    if value.is_null() {
        if field.nullable {
            return Ok(());
        }
        return Err(Error::UnexpectedNull(field.column.to_string()));
    }
    if !value.fits(field.ty) {
        return Err(Error::TypeMismatch {
            column: field.column.to_string(),
            expected: field.ty,
            found: value.kind(),
        });
    }
    Ok(())
}

#[cfg(feature = "sqlite")]
pub use self::sqlite::row_from_sqlite;

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::field::ColumnType;
    use sqlx::sqlite::SqliteRow;
    use sqlx::Row as _;

    /// Read every mapped column of `T` out of an sqlx row, by column name.
    /// Nullable columns the result set doesn't select are left out of the row.
    pub fn row_from_sqlite<T: TableMeta>(row: &SqliteRow) -> Result<Row> {
        let mut out = Row::new();
        for field in T::fields() {
            if field.nullable && row.try_column(field.column).is_err() {
                continue;
            }
            let value = match field.ty {
                ColumnType::Integer => row.try_get::<Option<i64>, _>(field.column)?.map(Value::Integer),
                ColumnType::Text => row.try_get::<Option<String>, _>(field.column)?.map(Value::Text),
            };
            out.insert(field.column, value.unwrap_or(Value::Null));
        }
        Ok(out)
    }
}
