//! Catalog service: business rules on top of the movie store.
//!
//! Everything here is a pure function of what the [`Store`] currently holds.
//! Nothing is cached, so every call re-queries the database.
//!
//! [`Store`]: reelbox_db::Store

pub mod error;
pub mod input;
pub mod service;
pub mod stats;
pub mod types;

pub use error::CatalogError;
pub use input::{MAX_RATING, normalize_title, parse_rating, parse_year};
pub use service::Catalog;
pub use stats::{Stats, compute_stats};
pub use types::RankedMovie;
