//! Repository implementations for database access
//!
//! Repositories borrow a session's connection, so every statement they run
//! belongs to that session's transaction.

pub mod users;

pub use users::UserRepo;
