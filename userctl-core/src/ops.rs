//! One operation per CLI command.
//!
//! Each operation takes the storage handle explicitly, runs inside a single
//! [`Session`](crate::db::Session) and returns a typed outcome. Printing is
//! left to the caller.

use tracing::{debug, info, instrument, warn};

use crate::db::Database;
use crate::error::Result;
use crate::models::{NewUser, Page, User};

/// Seed user inserted by [`initialize`]
pub const SEED_USERNAME: &str = "bob";
pub const SEED_EMAIL: &str = "bob@mail.com";
pub const SEED_PASSWORD: &str = "bobpass";

/// Result of [`create_user`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(User),
    /// Username or email already taken; nothing was written
    Conflict,
}

/// Result of [`change_email`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailChange {
    Updated(User),
    NotFound,
    /// Another user already has the new email; nothing was written
    Conflict,
}

/// Result of [`delete_user`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    NotFound,
}

/// Drop and recreate the `users` table, then insert the seed user.
///
/// Destroys all existing rows. Runs as one transaction, so a failure leaves
/// the previous table untouched.
#[instrument(skip_all)]
pub async fn initialize(db: &mut Database) -> Result<User> {
    let mut session = db.session().await?;
    session.drop_all().await?;
    session.create_db_and_tables().await?;

    let seed = NewUser::new(SEED_USERNAME, SEED_EMAIL, SEED_PASSWORD);
    let user = session.users().insert(&seed).await?;
    session.commit().await?;

    info!(id = user.id, "database initialized");
    Ok(user)
}

#[instrument(skip(db))]
pub async fn get_user(db: &mut Database, username: &str) -> Result<Option<User>> {
    let mut session = db.session().await?;
    let user = session.users().find_by_username(username).await?;
    session.commit().await?;
    Ok(user)
}

#[instrument(skip(db))]
pub async fn get_all_users(db: &mut Database) -> Result<Vec<User>> {
    let mut session = db.session().await?;
    let users = session.users().list().await?;
    session.commit().await?;
    debug!(count = users.len(), "listed users");
    Ok(users)
}

/// Users whose username or email contains `search`.
#[instrument(skip(db))]
pub async fn partial_match(db: &mut Database, search: &str) -> Result<Vec<User>> {
    let mut session = db.session().await?;
    let users = session.users().search(search).await?;
    session.commit().await?;
    debug!(count = users.len(), "search finished");
    Ok(users)
}

/// One page of users in id order.
#[instrument(skip(db))]
pub async fn first_users(db: &mut Database, page: Page) -> Result<Vec<User>> {
    let mut session = db.session().await?;
    let users = session.users().page(page).await?;
    session.commit().await?;
    Ok(users)
}

/// Insert a new user with the given credentials.
#[instrument(skip(db, password))]
pub async fn create_user(
    db: &mut Database,
    username: &str,
    email: &str,
    password: &str,
) -> Result<CreateOutcome> {
    let new_user = NewUser::new(username, email, password);
    let mut session = db.session().await?;

    let inserted = session.users().insert(&new_user).await;
    match inserted {
        Ok(user) => {
            session.commit().await?;
            info!(id = user.id, "user created");
            Ok(CreateOutcome::Created(user))
        }
        Err(err) if err.is_unique_violation() => {
            session.rollback().await?;
            warn!("username or email already taken");
            Ok(CreateOutcome::Conflict)
        }
        Err(err) => Err(err),
    }
}

/// Replace the email of `username`.
#[instrument(skip(db))]
pub async fn change_email(
    db: &mut Database,
    username: &str,
    new_email: &str,
) -> Result<EmailChange> {
    let mut session = db.session().await?;

    let existing = session.users().find_by_username(username).await?;
    let Some(user) = existing else {
        session.rollback().await?;
        return Ok(EmailChange::NotFound);
    };

    let updated = session.users().update_email(user.id, new_email).await;
    match updated {
        Ok(updated) => {
            session.commit().await?;
            info!(id = updated.id, "email updated");
            Ok(EmailChange::Updated(updated))
        }
        Err(err) if err.is_unique_violation() => {
            session.rollback().await?;
            warn!("email already taken");
            Ok(EmailChange::Conflict)
        }
        Err(err) => Err(err),
    }
}

#[instrument(skip(db))]
pub async fn delete_user(db: &mut Database, username: &str) -> Result<Deletion> {
    let mut session = db.session().await?;

    let existing = session.users().find_by_username(username).await?;
    let Some(user) = existing else {
        session.rollback().await?;
        return Ok(Deletion::NotFound);
    };

    session.users().delete(user.id).await?;
    session.commit().await?;
    info!(id = user.id, "user deleted");
    Ok(Deletion::Deleted)
}
