use crate::modules::items::core::ports::ItemsStoreError;
use crate::shared::core::validation::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("item not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(ItemsStoreError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<ItemsStoreError> for ApplicationError {
    fn from(err: ItemsStoreError) -> Self {
        match err {
            ItemsStoreError::NotFound { guid } => ApplicationError::NotFound(guid),
            other => ApplicationError::Store(other),
        }
    }
}

/// Rejects blank guids. The guid itself is returned untouched, so lookups
/// match the stored key exactly.
pub fn require_guid(guid: &str) -> Result<&str, ApplicationError> {
    if guid.trim().is_empty() {
        return Err(ApplicationError::InvalidArgument("GUID is required".into()));
    }
    Ok(guid)
}
