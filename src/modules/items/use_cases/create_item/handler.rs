// Create command handler orchestrates the write flow.
//
// Responsibilities
// - Validate and normalize the payload.
// - Assign guid, index and creation time.
// - Insert into the store and return the materialized item.
//
// The index is `count + 1` read before the insert. Two concurrent creates can
// read the same count and share an index. The index only orders the display,
// guids stay unique.

use crate::modules::items::core::errors::ApplicationError;
use crate::modules::items::core::item::Item;
use crate::modules::items::core::ports::ItemsStore;
use crate::modules::items::use_cases::create_item::dto::ItemCreateDto;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct CreateItemHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateItemHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, dto: ItemCreateDto) -> Result<Item, ApplicationError> {
        let new_item = dto.into_new_item()?;

        let count = self.store.count().await?;
        let item = new_item.materialize(Uuid::now_v7().to_string(), count + 1, Utc::now());

        self.store.create(item.clone()).await?;
        tracing::info!(guid = %item.guid, index = item.index, "created item");
        Ok(item)
    }
}
