// Ports define what the items use cases need from storage, without implementing it.
//
// Boundaries
// - No concrete storage here. Adapters implement `ItemsStore` in adapters/outbound.
//
// Contract
// - Every call is atomic on its own. Sequences of calls are not.
// - Reads hand out owned copies, never references into the store.

use crate::modules::items::core::item::Item;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemsStoreError {
    #[error("item not found: {guid}")]
    NotFound { guid: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ItemsStore: Send + Sync {
    /// Inserts the item, overwriting any record with the same guid.
    async fn create(&self, item: Item) -> Result<(), ItemsStoreError>;

    /// Replaces an existing record wholesale.
    async fn update(&self, item: Item) -> Result<(), ItemsStoreError>;

    async fn delete(&self, guid: &str) -> Result<(), ItemsStoreError>;

    async fn get_by_guid(&self, guid: &str) -> Result<Item, ItemsStoreError>;

    async fn count(&self) -> Result<usize, ItemsStoreError>;

    /// All items ordered by ascending index.
    async fn get_all(&self) -> Result<Vec<Item>, ItemsStoreError>;

    /// Items whose guid, type or status contains `query` (case-insensitive),
    /// ordered by ascending index and truncated to `limit`. A `limit` of 0 means no limit.
    async fn get_all_filtered(&self, query: &str, limit: usize) -> Result<Vec<Item>, ItemsStoreError>;
}
