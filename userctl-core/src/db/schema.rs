//! Schema for the single `users` table
//!
//! No migrations: the table is created if absent and dropped wholesale by
//! `initialize`.

use sqlx::SqliteConnection;

use crate::error::Result;

/// Table name shared by the schema and the repository queries
pub const USERS_TABLE: &str = "users";

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id       INTEGER PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        email    TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;

const DROP_USERS: &str = "DROP TABLE IF EXISTS users";

/// Create the `users` table if it does not exist.
pub async fn create_db_and_tables(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(CREATE_USERS).execute(&mut *conn).await?;
    Ok(())
}

/// Drop the `users` table and every row in it.
pub async fn drop_all(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(DROP_USERS).execute(&mut *conn).await?;
    Ok(())
}
