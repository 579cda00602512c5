//! Database location and connect options

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

use crate::error::{Error, Result};

/// Database used when neither `--database-url` nor `DATABASE_URL` is given.
/// Relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db";

/// Where the user table lives and how to open it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite connection string, e.g. `sqlite://users.db` or `sqlite::memory:`
    pub url: String,
    /// Create the database file on first connect
    pub create_if_missing: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            create_if_missing: true,
        }
    }

    /// Parse the URL into sqlx connect options.
    pub(crate) fn connect_options(&self) -> Result<SqliteConnectOptions> {
        if !self.url.starts_with("sqlite:") {
            return Err(Error::config(format!(
                "unsupported database url '{}': expected a sqlite: url",
                self.url
            )));
        }

        let options = SqliteConnectOptions::from_str(&self.url).map_err(|err| {
            Error::config(format!("invalid database url '{}': {}", self.url, err))
        })?;

        Ok(options.create_if_missing(self.create_if_missing))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, DEFAULT_DATABASE_URL);
        assert!(config.create_if_missing);
    }

    #[test]
    fn parses_file_url() {
        let config = DatabaseConfig::new("sqlite:///tmp/userctl/users.db");
        let options = config.connect_options().unwrap();
        assert_eq!(
            options.get_filename(),
            std::path::Path::new("/tmp/userctl/users.db")
        );
    }

    #[test]
    fn rejects_non_sqlite_url() {
        let err = DatabaseConfig::new("postgres://localhost/users")
            .connect_options()
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("postgres://localhost/users"));
    }
}
