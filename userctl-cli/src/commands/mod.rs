//! Command implementations for the userctl CLI
//!
//! Every command opens the database, runs exactly one operation from
//! `userctl_core::ops`, prints the outcome and closes the connection.

pub mod mutate;
pub mod query;

use anyhow::{Context, Result};
use clap::Subcommand;
use userctl_core::models::DEFAULT_LIMIT;
use userctl_core::{Database, DatabaseConfig};

use crate::output::Output;

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Drop and recreate the users table, then insert the seed user (destroys all data)
    Initialize,
    /// Retrieve a user by their username
    GetUser {
        /// The username of the user to retrieve
        username: String,
    },
    /// Get all users in the database
    GetAllUsers,
    /// Change the email of a user by their username
    ChangeEmail {
        /// The username of the user to update
        username: String,
        /// The new email address for the user
        new_email: String,
    },
    /// Create a new user with a username, email and password
    CreateUser {
        /// The username of the new user
        username: String,
        /// The email address of the new user
        new_email: String,
        /// The password for the new user
        password: String,
    },
    /// Delete a user by their username
    DeleteUser {
        /// The username of the user to delete
        username: String,
    },
    /// Search for users by a partial match on their username or email
    PartialMatch {
        /// The partial username or email to search for
        search: String,
    },
    /// Get a paginated list of users
    FirstUsers {
        /// Number of users to return
        #[arg(default_value_t = DEFAULT_LIMIT)]
        limit: u32,
        /// Number of users to skip
        #[arg(default_value_t = 0)]
        offset: u32,
    },
}

/// Dispatch one user command against the configured database.
pub async fn run_user_command(
    command: UserCommand,
    config: &DatabaseConfig,
    output: Output,
) -> Result<()> {
    let mut db = Database::connect(config)
        .await
        .with_context(|| format!("failed to open database {}", config.url))?;

    match command {
        UserCommand::Initialize => mutate::run_initialize(&mut db, output).await?,
        UserCommand::GetUser { username } => {
            query::run_get_user(&mut db, output, &username).await?
        }
        UserCommand::GetAllUsers => query::run_get_all_users(&mut db, output).await?,
        UserCommand::ChangeEmail {
            username,
            new_email,
        } => mutate::run_change_email(&mut db, output, &username, &new_email).await?,
        UserCommand::CreateUser {
            username,
            new_email,
            password,
        } => mutate::run_create_user(&mut db, output, &username, &new_email, &password).await?,
        UserCommand::DeleteUser { username } => {
            mutate::run_delete_user(&mut db, output, &username).await?
        }
        UserCommand::PartialMatch { search } => {
            query::run_partial_match(&mut db, output, &search).await?
        }
        UserCommand::FirstUsers { limit, offset } => {
            query::run_first_users(&mut db, output, limit, offset).await?
        }
    }

    db.close().await.context("failed to close database")?;
    Ok(())
}
