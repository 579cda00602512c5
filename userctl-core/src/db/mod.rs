//! Database layer - storage handle, scoped sessions and repositories
//!
//! # Design Principles
//!
//! - One connection per process, owned by [`Database`] (no pool)
//! - Every command runs inside exactly one [`Session`] (a transaction)
//! - Rely on the table's `UNIQUE` constraints, no check-then-insert

pub mod repos;
pub mod schema;

use std::path::Path;

use sqlx::{ConnectOptions, Connection, Sqlite, SqliteConnection, Transaction};
use tracing::{debug, instrument};

use crate::config::DatabaseConfig;
use crate::error::Result;

pub use repos::UserRepo;

/// Handle to the SQLite database holding the `users` table.
///
/// Passed explicitly to every operation in [`crate::ops`].
pub struct Database {
    conn: SqliteConnection,
    url: String,
}

impl Database {
    /// Open the database described by `config`, creating the file and the
    /// `users` table if they do not exist yet.
    #[instrument(skip_all, fields(url = %config.url))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = config.connect_options()?;

        if config.create_if_missing {
            ensure_parent_dir(options.get_filename())?;
        }

        let mut conn = options.connect().await?;
        schema::create_db_and_tables(&mut conn).await?;
        debug!("database ready");

        Ok(Self {
            conn,
            url: config.url.clone(),
        })
    }

    /// Open a private in-memory database (for testing)
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig::new("sqlite::memory:")).await
    }

    /// The connection string this handle was opened with
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Begin a scoped session.
    ///
    /// The session ends with [`Session::commit`] or [`Session::rollback`];
    /// dropping it without either rolls the transaction back.
    pub async fn session(&mut self) -> Result<Session<'_>> {
        let tx = self.conn.begin().await?;
        Ok(Session { tx })
    }

    /// Close the underlying connection cleanly.
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }
}

/// A transaction bound to one command's execution
pub struct Session<'c> {
    tx: Transaction<'c, Sqlite>,
}

impl<'c> Session<'c> {
    /// Repository over this session's transaction
    pub fn users(&mut self) -> UserRepo<'_> {
        UserRepo::new(&mut *self.tx)
    }

    pub async fn create_db_and_tables(&mut self) -> Result<()> {
        schema::create_db_and_tables(&mut *self.tx).await
    }

    pub async fn drop_all(&mut self) -> Result<()> {
        schema::drop_all(&mut *self.tx).await
    }

    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> Result<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            debug!("created database directory {}", parent.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;

    #[tokio::test]
    async fn commit_persists_writes() {
        let mut db = Database::in_memory().await.unwrap();

        let mut session = db.session().await.unwrap();
        session
            .users()
            .insert(&NewUser::new("bob", "bob@mail.com", "bobpass"))
            .await
            .unwrap();
        session.commit().await.unwrap();

        let mut session = db.session().await.unwrap();
        assert_eq!(session.users().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rollback_discards_writes() {
        let mut db = Database::in_memory().await.unwrap();

        let mut session = db.session().await.unwrap();
        session
            .users()
            .insert(&NewUser::new("bob", "bob@mail.com", "bobpass"))
            .await
            .unwrap();
        session.rollback().await.unwrap();

        let mut session = db.session().await.unwrap();
        assert_eq!(session.users().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn dropped_session_rolls_back() {
        let mut db = Database::in_memory().await.unwrap();

        {
            let mut session = db.session().await.unwrap();
            session
                .users()
                .insert(&NewUser::new("bob", "bob@mail.com", "bobpass"))
                .await
                .unwrap();
        }

        let mut session = db.session().await.unwrap();
        assert_eq!(session.users().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn drop_all_is_transactional() {
        let mut db = Database::in_memory().await.unwrap();

        let mut session = db.session().await.unwrap();
        session.drop_all().await.unwrap();
        session.rollback().await.unwrap();

        // table survived the rolled-back drop
        let mut session = db.session().await.unwrap();
        assert_eq!(session.users().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn connect_creates_file_and_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("users.db");
        let config = DatabaseConfig::new(format!("sqlite://{}", path.display()));

        let db = Database::connect(&config).await.unwrap();
        assert_eq!(db.url(), config.url);
        db.close().await.unwrap();

        assert!(path.exists());
    }
}
