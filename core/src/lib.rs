pub use self::error::{Error, Result};
pub use field::{ColumnType, Field};
pub use row::Row;
pub use value::{FromValue, IntoValue, Value};

mod error;
pub mod binding;
pub mod config;
pub mod field;
pub mod mapping;
pub mod model;
pub mod row;
pub mod value;
