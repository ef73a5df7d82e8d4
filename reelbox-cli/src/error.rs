use reelbox_catalog::CatalogError;
use reelbox_db::StoreError;
use reelbox_omdb::FetchError;
use reelbox_site::SiteError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on the terminal
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Opening the database failed
    #[error("Database error: {0}")]
    Store(#[from] StoreError),

    /// A catalog rule was violated or storage failed mid-command
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Metadata lookup failed
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// Website generation failed
    #[error("{0}")]
    Site(#[from] SiteError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Standard input reached end-of-file
    #[error("input closed")]
    InputClosed,
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
