/// Everything needed from sqlx to open a connection and run hand-written queries.
/// Using this module, it is optional to directly depend on the `sqlx` crate.
pub use sqlx::{query, query_as, Connection, Executor, FromRow};

#[cfg(feature = "sqlite")]
pub use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions, SqliteRow};
