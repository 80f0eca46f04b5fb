// Query handler for listing items.
//
// Responsibilities
// - Pass the trimmed free-text query and the limit to the store.
// - Zero matches is an empty list, never an error.

use crate::modules::items::core::errors::ApplicationError;
use crate::modules::items::core::item::Item;
use crate::modules::items::core::ports::ItemsStore;
use crate::modules::items::use_cases::list_items::query::ListItemsQuery;
use std::sync::Arc;

pub struct ListItemsHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListItemsHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListItemsQuery) -> Result<Vec<Item>, ApplicationError> {
        let items = self
            .store
            .get_all_filtered(&query.query, query.limit)
            .await?;
        tracing::debug!(query = %query.query, limit = query.limit, found = items.len(), "listed items");
        Ok(items)
    }
}
