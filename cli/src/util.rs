use tinyorm::model::TableMeta;
use tinyorm::{contract, describe, expect_columns, validate, Person, Result, TableDescription};

/// A model the CLI knows about, paired with the column set its contract declares.
pub struct Registered {
    pub table: &'static str,
    pub describe: fn() -> TableDescription,
    pub validate: fn() -> Result<()>,
    pub expect_contract: fn() -> Result<()>,
}

pub fn registry() -> Vec<Registered> {
    vec![Registered {
        table: Person::table_name(),
        describe: describe::<Person>,
        validate: validate::<Person>,
        expect_contract: || expect_columns::<Person>(&contract::person::ALL_COLUMNS),
    }]
}
