//! User record

use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

/// A row of the `users` table.
///
/// `username` and `email` are each unique across the table. `password` is
/// stored as given and never leaves the process: it is skipped by both
/// `Display` and JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} username='{}' email='{}'",
            self.id, self.username, self.email
        )
    }
}

/// Fields supplied when inserting a user; `id` is assigned by SQLite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}
