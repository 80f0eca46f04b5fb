use crate::modules::items::core::errors::{ApplicationError, require_guid};
use crate::modules::items::core::ports::ItemsStore;
use std::sync::Arc;

pub struct DeleteItemHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteItemHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Deletion is permanent; deleting the same guid again is NotFound.
    pub async fn handle(&self, guid: &str) -> Result<(), ApplicationError> {
        let guid = require_guid(guid)?;
        self.store.delete(guid).await?;
        tracing::info!(guid = %guid, "deleted item");
        Ok(())
    }
}
