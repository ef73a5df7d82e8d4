//! Read queries for users and collections.

use rusqlite::params;

use crate::error::StoreError;
use crate::schema::Store;
use crate::types::{MovieEntry, MovieMap, User, UserId};

impl Store {
    /// List all users in registration order.
    pub fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT id, name FROM users ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Look up a user's name by ID.
    pub fn get_user_name(&self, user_id: UserId) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT name FROM users WHERE id = ?1")?;
        let result = stmt.query_row(params![user_id], |row| row.get::<_, String>(0));
        match result {
            Ok(name) => Ok(Some(name)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All movies owned by a user, keyed by title.
    pub fn list_movies(&self, user_id: UserId) -> Result<MovieMap, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, year, rating FROM movies WHERE user_id = ?1")?;
        let rows = stmt.query_map(params![user_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                MovieEntry {
                    year: row.get(1)?,
                    rating: row.get(2)?,
                },
            ))
        })?;
        rows.collect::<Result<MovieMap, _>>().map_err(Into::into)
    }
}
