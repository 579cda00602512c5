//! Domain types for the user table

pub mod page;
pub mod user;

pub use page::{Page, DEFAULT_LIMIT};
pub use user::{NewUser, User};
