//! Writing commands: initialize, create-user, change-email, delete-user

use anyhow::{Context, Result};
use userctl_core::{ops, CreateOutcome, Database, Deletion, EmailChange};

use crate::output::Output;

pub async fn run_initialize(db: &mut Database, output: Output) -> Result<()> {
    ops::initialize(db)
        .await
        .context("failed to initialize database")?;
    output.message("Database Initialized");
    Ok(())
}

pub async fn run_create_user(
    db: &mut Database,
    output: Output,
    username: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let outcome = ops::create_user(db, username, email, password)
        .await
        .context("failed to create user")?;

    match outcome {
        CreateOutcome::Created(user) => output.user(&user)?,
        CreateOutcome::Conflict => output.message("Username or email already taken!"),
    }
    Ok(())
}

pub async fn run_change_email(
    db: &mut Database,
    output: Output,
    username: &str,
    new_email: &str,
) -> Result<()> {
    let outcome = ops::change_email(db, username, new_email)
        .await
        .context("failed to change email")?;

    match outcome {
        EmailChange::Updated(user) => output.message(format!(
            "Updated {}'s email to {}",
            user.username, user.email
        )),
        EmailChange::NotFound => {
            output.message(format!("{} not found! Unable to update email.", username))
        }
        EmailChange::Conflict => output.message("Email already taken!"),
    }
    Ok(())
}

pub async fn run_delete_user(db: &mut Database, output: Output, username: &str) -> Result<()> {
    let outcome = ops::delete_user(db, username)
        .await
        .context("failed to delete user")?;

    match outcome {
        Deletion::Deleted => output.message(format!("{} deleted", username)),
        Deletion::NotFound => {
            output.message(format!("{} not found! Unable to delete user.", username))
        }
    }
    Ok(())
}
