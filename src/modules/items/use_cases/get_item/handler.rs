use crate::modules::items::core::errors::{ApplicationError, require_guid};
use crate::modules::items::core::item::Item;
use crate::modules::items::core::ports::ItemsStore;
use std::sync::Arc;

pub struct GetItemHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetItemHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, guid: &str) -> Result<Item, ApplicationError> {
        let guid = require_guid(guid)?;
        let item = self.store.get_by_guid(guid).await?;
        tracing::debug!(guid = %item.guid, "fetched item");
        Ok(item)
    }
}
