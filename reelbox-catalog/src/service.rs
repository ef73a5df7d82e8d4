//! The catalog service: validated, user-facing operations over a [`Store`].

use rand::seq::IndexedRandom;
use reelbox_db::{MovieMap, Store, User, UserId};

use crate::error::CatalogError;
use crate::input::{check_rating, check_year, normalize_title, parse_rating, parse_year};
use crate::stats::{Stats, compute_stats};
use crate::types::RankedMovie;

/// Business rules layered on a borrowed [`Store`].
///
/// Holds no state of its own; cheap to construct wherever a store is at hand.
#[derive(Clone, Copy)]
pub struct Catalog<'a> {
    store: &'a Store,
}

impl<'a> Catalog<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    // ── Users ───────────────────────────────────────────────────────────────

    /// Register a new user after trimming the name.
    pub fn register_user(&self, raw_name: &str) -> Result<UserId, CatalogError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(CatalogError::validation("Name cannot be empty."));
        }
        let id = self.store.create_user(name)?;
        log::debug!("Registered user '{name}'");
        Ok(id)
    }

    pub fn users(&self) -> Result<Vec<User>, CatalogError> {
        Ok(self.store.list_users()?)
    }

    pub fn user_name(&self, user_id: UserId) -> Result<String, CatalogError> {
        self.store
            .get_user_name(user_id)?
            .ok_or(CatalogError::UserNotFound(user_id))
    }

    // ── Collection ──────────────────────────────────────────────────────────

    pub fn movies(&self, user_id: UserId) -> Result<MovieMap, CatalogError> {
        Ok(self.store.list_movies(user_id)?)
    }

    /// Add a movie from raw text fields as typed by the user.
    ///
    /// Input is validated before the store is touched.
    pub fn add_movie_for_user(
        &self,
        user_id: UserId,
        raw_title: &str,
        raw_year_text: &str,
        raw_rating_text: &str,
    ) -> Result<RankedMovie, CatalogError> {
        let title = normalize_title(raw_title)?;
        let year = parse_year(raw_year_text)?;
        let rating = parse_rating(raw_rating_text)?;
        self.add_movie(user_id, &title, year, rating)
    }

    /// Add an already-typed movie, e.g. one returned by a metadata lookup.
    pub fn add_movie(
        &self,
        user_id: UserId,
        title: &str,
        year: i32,
        rating: f64,
    ) -> Result<RankedMovie, CatalogError> {
        let title = normalize_title(title)?;
        let year = check_year(year)?;
        let rating = check_rating(rating)?;

        // Also enforced by UNIQUE(user_id, title) in the store.
        if self.has_movie(user_id, &title)? {
            return Err(CatalogError::DuplicateMovie(title));
        }

        self.store.add_movie(user_id, &title, year, rating)?;
        log::debug!("User {user_id} added '{title}'");
        Ok(RankedMovie {
            title,
            year,
            rating,
        })
    }

    /// True if the user already owns a movie with exactly this title.
    pub fn has_movie(&self, user_id: UserId, title: &str) -> Result<bool, CatalogError> {
        Ok(self.store.list_movies(user_id)?.contains_key(title))
    }

    /// Returns `false` if there was nothing to delete.
    pub fn delete_movie(&self, user_id: UserId, raw_title: &str) -> Result<bool, CatalogError> {
        let title = normalize_title(raw_title)?;
        Ok(self.store.delete_movie(user_id, &title)?)
    }

    /// Returns `false` if the user has no movie with that title.
    pub fn update_rating(
        &self,
        user_id: UserId,
        raw_title: &str,
        raw_rating_text: &str,
    ) -> Result<bool, CatalogError> {
        let title = normalize_title(raw_title)?;
        let rating = parse_rating(raw_rating_text)?;
        Ok(self.store.update_movie(user_id, &title, rating)?)
    }

    // ── Aggregates ──────────────────────────────────────────────────────────

    pub fn compute_stats(&self, user_id: UserId) -> Result<Stats, CatalogError> {
        compute_stats(&self.store.list_movies(user_id)?).ok_or(CatalogError::NoMovies)
    }

    /// Pick one movie uniformly at random. Not seeded; every call is a new draw.
    pub fn random_movie(&self, user_id: UserId) -> Result<RankedMovie, CatalogError> {
        let movies: Vec<_> = self.store.list_movies(user_id)?.into_iter().collect();
        movies
            .choose(&mut rand::rng())
            .cloned()
            .map(RankedMovie::from)
            .ok_or(CatalogError::NoMovies)
    }

    /// Movies whose title contains `query`, ignoring case.
    ///
    /// The collection is read once up front; matching is lazy.
    pub fn search(
        &self,
        user_id: UserId,
        query: &str,
    ) -> Result<impl Iterator<Item = RankedMovie> + use<>, CatalogError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(CatalogError::validation("Search query cannot be empty."));
        }
        let movies = self.store.list_movies(user_id)?;
        Ok(movies
            .into_iter()
            .filter(move |(title, _)| title.to_lowercase().contains(&needle))
            .map(RankedMovie::from))
    }

    /// The whole collection, highest rating first.
    ///
    /// Equal ratings keep listing order (alphabetical by title).
    pub fn sorted_by_rating(&self, user_id: UserId) -> Result<Vec<RankedMovie>, CatalogError> {
        let mut movies: Vec<RankedMovie> = self
            .store
            .list_movies(user_id)?
            .into_iter()
            .map(RankedMovie::from)
            .collect();
        movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        Ok(movies)
    }
}
