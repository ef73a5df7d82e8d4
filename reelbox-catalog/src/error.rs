use reelbox_db::{StoreError, UserId};

/// Errors surfaced to the user by catalog operations.
///
/// Each one aborts a single command; none of them is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Bad user input (empty title, non-numeric year or rating, ...).
    #[error("{0}")]
    Validation(String),

    #[error("Movie '{0}' already exists in your collection")]
    DuplicateMovie(String),

    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    #[error("No user with id {0}")]
    UserNotFound(UserId),

    #[error("No movies in the collection")]
    NoMovies,

    #[error("Storage error: {0}")]
    Store(StoreError),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateMovie { title, .. } => Self::DuplicateMovie(title),
            StoreError::DuplicateUser(name) => Self::DuplicateUser(name),
            StoreError::UnknownUser(id) => Self::UserNotFound(id),
            other => Self::Store(other),
        }
    }
}
