pub use tinyorm_core::binding::{bind, bind_all, check_value};
pub use tinyorm_core::config::Config;
pub use tinyorm_core::mapping::{describe, expect_columns, validate, TableDescription};
pub use tinyorm_core::{ColumnType, Error, Field, FromValue, IntoValue, Result, Row, Value};

pub use person::Person;

pub mod contract;
pub mod export;
pub mod person;

pub mod model {
    pub use tinyorm_core::model::*;
}
