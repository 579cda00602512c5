//! Read-only commands: get-user, get-all-users, partial-match, first-users

use anyhow::{Context, Result};
use userctl_core::{ops, Database, Page};

use crate::output::Output;

pub async fn run_get_user(db: &mut Database, output: Output, username: &str) -> Result<()> {
    let user = ops::get_user(db, username)
        .await
        .context("failed to look up user")?;

    match user {
        Some(user) => output.user(&user)?,
        None => output.message(format!("{} not found!", username)),
    }
    Ok(())
}

pub async fn run_get_all_users(db: &mut Database, output: Output) -> Result<()> {
    let users = ops::get_all_users(db)
        .await
        .context("failed to list users")?;
    output.users(&users, "No users found")
}

pub async fn run_partial_match(db: &mut Database, output: Output, search: &str) -> Result<()> {
    let users = ops::partial_match(db, search)
        .await
        .context("failed to search users")?;
    output.users(&users, "User not found")
}

pub async fn run_first_users(
    db: &mut Database,
    output: Output,
    limit: u32,
    offset: u32,
) -> Result<()> {
    let users = ops::first_users(db, Page::new(limit, offset))
        .await
        .context("failed to page users")?;
    output.users(&users, "User not found")
}
