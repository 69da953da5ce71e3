//! Storage contracts: the column names each table is laid out with.
//!
//! Models reference these constants from their mapping tables instead of
//! spelling column names inline, so a schema rename happens in one place.

/// Layout of the `person` table.
///
/// ```sql
/// CREATE TABLE person (
///     _id INTEGER PRIMARY KEY,
///     name TEXT NOT NULL,
///     email TEXT NOT NULL,
///     age INTEGER
/// );
/// ```
pub mod person {
    pub const TABLE_NAME: &str = "person";

    /// INTEGER PRIMARY KEY
    pub const COLUMN_ID: &str = "_id";
    /// TEXT NOT NULL
    pub const COLUMN_NAME: &str = "name";
    /// TEXT NOT NULL
    pub const COLUMN_EMAIL: &str = "email";
    /// INTEGER
    pub const COLUMN_AGE: &str = "age";

    pub const ALL_COLUMNS: [&str; 4] = [COLUMN_ID, COLUMN_NAME, COLUMN_EMAIL, COLUMN_AGE];
}
