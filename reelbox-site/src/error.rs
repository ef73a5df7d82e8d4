use std::path::PathBuf;

/// Errors that can occur while generating the collection page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template file '{0}' not found")]
    TemplateNotFound(PathBuf),

    #[error("Template is missing the {0} placeholder")]
    InvalidTemplate(&'static str),

    #[error("No movies available to generate website")]
    NoMovies,
}
