//! userctl-core: storage and operations for the `users` table
//!
//! - [`db::Database`]: explicit storage handle yielding scoped sessions
//! - [`ops`]: one async operation per CLI command, returning typed outcomes
//! - [`models`]: the user record and paging window

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod ops;

pub use config::{DatabaseConfig, DEFAULT_DATABASE_URL};
pub use db::{Database, Session, UserRepo};
pub use error::{Error, Result};
pub use models::{NewUser, Page, User};
pub use ops::{CreateOutcome, Deletion, EmailChange};
