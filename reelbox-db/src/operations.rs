//! Write operations for users and movies.
//!
//! Every statement runs in SQLite autocommit mode, so a successful return
//! means the change is already on disk.

use rusqlite::params;

use crate::error::{StoreError, is_foreign_key_violation, is_unique_violation};
use crate::schema::Store;
use crate::types::UserId;

impl Store {
    // ── User Operations ─────────────────────────────────────────────────────

    /// Register a new user. Returns the generated ID.
    pub fn create_user(&self, name: &str) -> Result<UserId, StoreError> {
        match self
            .conn
            .execute("INSERT INTO users (name) VALUES (?1)", params![name])
        {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                log::debug!("Created user '{name}' with id {id}");
                Ok(id)
            }
            Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateUser(name.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    // ── Movie Operations ────────────────────────────────────────────────────

    /// Insert a movie into a user's collection.
    ///
    /// Uniqueness of `(user_id, title)` is left to the table constraint; a
    /// violation comes back as [`StoreError::DuplicateMovie`].
    pub fn add_movie(
        &self,
        user_id: UserId,
        title: &str,
        year: i32,
        rating: f64,
    ) -> Result<(), StoreError> {
        let result = self.conn.execute(
            "INSERT INTO movies (user_id, title, year, rating) VALUES (?1, ?2, ?3, ?4)",
            params![user_id, title, year, rating],
        );
        match result {
            Ok(_) => {
                log::debug!("Added '{title}' ({year}) for user {user_id}");
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateMovie {
                user_id,
                title: title.to_string(),
            }),
            Err(e) if is_foreign_key_violation(&e) => Err(StoreError::UnknownUser(user_id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a movie from a user's collection.
    ///
    /// Returns `false` when the user has no movie with that title.
    pub fn delete_movie(&self, user_id: UserId, title: &str) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "DELETE FROM movies WHERE user_id = ?1 AND title = ?2",
            params![user_id, title],
        )?;
        Ok(changed > 0)
    }

    /// Change the rating of a movie. Title and year are never rewritten.
    ///
    /// Returns `false` when the user has no movie with that title.
    pub fn update_movie(
        &self,
        user_id: UserId,
        title: &str,
        rating: f64,
    ) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "UPDATE movies SET rating = ?3 WHERE user_id = ?1 AND title = ?2",
            params![user_id, title, rating],
        )?;
        Ok(changed > 0)
    }
}
