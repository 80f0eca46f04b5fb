// Update command handler.
//
// Responsibilities
// - Load the stored item, reporting NotFound before looking at the payload.
// - Validate and normalize the patch, merge it onto a copy, write it back.
//
// Load and write are two store calls. If the item is deleted in between, the
// store's own existence check turns the write into NotFound.

use crate::modules::items::core::errors::{ApplicationError, require_guid};
use crate::modules::items::core::item::Item;
use crate::modules::items::core::ports::ItemsStore;
use crate::modules::items::use_cases::update_item::dto::{ItemUpdateDto, apply_partial_update};
use std::sync::Arc;

pub struct UpdateItemHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateItemHandler<TStore>
where
    TStore: ItemsStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, guid: &str, dto: ItemUpdateDto) -> Result<Item, ApplicationError> {
        let guid = require_guid(guid)?;
        let existing = self.store.get_by_guid(guid).await?;

        let patch = dto.into_item_patch()?;
        let merged = apply_partial_update(&existing, patch);

        self.store.update(merged.clone()).await?;
        tracing::info!(guid = %merged.guid, "updated item");
        Ok(merged)
    }
}
