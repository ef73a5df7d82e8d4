//! Movie metadata lookup against the OMDb API.
//!
//! One best-effort blocking request per title. Every failure mode
//! (network, timeout, unknown title, malformed payload) comes back as a
//! [`FetchError`] the caller can show and move past.

pub mod api_key;
pub mod client;
pub mod error;
pub mod types;

pub use api_key::{
    API_KEY_ENV, ApiKey, KeySource, config_path, key_source, save_to_file, save_to_path,
};
pub use client::{MetadataSource, OmdbClient};
pub use error::FetchError;
pub use types::{MovieMetadata, parse_rating, parse_year};
