//! Static HTML page generation for a user's movie collection.

pub mod error;
pub mod html;

pub use error::SiteError;
pub use html::{DEFAULT_TEMPLATE, GRID_PLACEHOLDER, SiteGenerator, TITLE_PLACEHOLDER};
