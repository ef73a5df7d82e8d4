//! SQLite persistence layer for movie collections.
//!
//! A [`Store`] owns a single connection and provides schema bootstrap,
//! user registration, and per-user movie CRUD backed by SQLite (via
//! rusqlite with the bundled feature).
//!
//! Concurrent use of one database file from several processes is not
//! supported.

pub mod error;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod types;

pub use error::StoreError;
pub use schema::Store;
pub use types::{MovieEntry, MovieMap, User, UserId, format_rating};
