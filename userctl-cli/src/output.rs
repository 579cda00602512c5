//! Printing of command results
//!
//! Text mode prints one `Display` line per user. JSON mode prints a single
//! object for one user and an array for listings (`[]` when empty). Status
//! messages are plain text in both modes.

use std::fmt::Display;

use anyhow::Result;
use userctl_core::User;

#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn message(&self, msg: impl Display) {
        println!("{}", msg);
    }

    pub fn user(&self, user: &User) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(user)?);
        } else {
            println!("{}", user);
        }
        Ok(())
    }

    /// Print a listing, or `empty` when there is nothing to show in text mode.
    pub fn users(&self, users: &[User], empty: &str) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(users)?);
        } else if users.is_empty() {
            println!("{}", empty);
        } else {
            for user in users {
                println!("{}", user);
            }
        }
        Ok(())
    }
}
