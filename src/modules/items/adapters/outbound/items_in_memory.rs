// In memory implementation of the ItemsStore port.
//
// Purpose
// - Authoritative keeper of all items for the lifetime of the process.
//
// Responsibilities
// - Store items in a map keyed by guid behind a readers-writer lock.
// - Filter, order by index, and limit on read.
// - Hand out clones so callers never touch the stored records.

use crate::modules::items::core::item::Item;
use crate::modules::items::core::ports::{ItemsStore, ItemsStoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryItemsStore {
    items: RwLock<HashMap<String, Item>>,
    is_offline: bool,
}

impl InMemoryItemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), ItemsStoreError> {
        if self.is_offline {
            return Err(ItemsStoreError::Backend("Items store offline".into()));
        }
        Ok(())
    }
}

fn ensure_guid(item: &Item) -> Result<(), ItemsStoreError> {
    if item.guid.trim().is_empty() {
        return Err(ItemsStoreError::InvalidArgument(
            "item guid cannot be empty".into(),
        ));
    }
    Ok(())
}

fn matches_query(item: &Item, query: &str) -> bool {
    item.guid.to_lowercase().contains(query)
        || item.item_type.as_str().to_lowercase().contains(query)
        || item.status.as_str().to_lowercase().contains(query)
}

fn sorted_by_index(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.guid.cmp(&b.guid)));
    items
}

#[async_trait::async_trait]
impl ItemsStore for InMemoryItemsStore {
    async fn create(&self, item: Item) -> Result<(), ItemsStoreError> {
        self.ensure_online()?;
        ensure_guid(&item)?;

        let mut guard = self.items.write().await;
        guard.insert(item.guid.clone(), item);
        Ok(())
    }

    async fn update(&self, item: Item) -> Result<(), ItemsStoreError> {
        self.ensure_online()?;
        ensure_guid(&item)?;

        let mut guard = self.items.write().await;
        match guard.get_mut(&item.guid) {
            Some(stored) => {
                *stored = item;
                Ok(())
            }
            None => Err(ItemsStoreError::NotFound { guid: item.guid }),
        }
    }

    async fn delete(&self, guid: &str) -> Result<(), ItemsStoreError> {
        self.ensure_online()?;

        let mut guard = self.items.write().await;
        guard
            .remove(guid)
            .map(|_| ())
            .ok_or_else(|| ItemsStoreError::NotFound { guid: guid.to_string() })
    }

    async fn get_by_guid(&self, guid: &str) -> Result<Item, ItemsStoreError> {
        self.ensure_online()?;

        self.items
            .read()
            .await
            .get(guid)
            .cloned()
            .ok_or_else(|| ItemsStoreError::NotFound { guid: guid.to_string() })
    }

    async fn count(&self) -> Result<usize, ItemsStoreError> {
        self.ensure_online()?;

        Ok(self.items.read().await.len())
    }

    async fn get_all(&self) -> Result<Vec<Item>, ItemsStoreError> {
        self.ensure_online()?;

        let items: Vec<Item> = self.items.read().await.values().cloned().collect();
        Ok(sorted_by_index(items))
    }

    async fn get_all_filtered(&self, query: &str, limit: usize) -> Result<Vec<Item>, ItemsStoreError> {
        self.ensure_online()?;

        let query = query.trim().to_lowercase();
        let matching: Vec<Item> = {
            let guard = self.items.read().await;
            guard
                .values()
                .filter(|item| query.is_empty() || matches_query(item, &query))
                .cloned()
                .collect()
        };

        let mut items = sorted_by_index(matching);
        if limit > 0 {
            items.truncate(limit);
        }
        Ok(items)
    }
}
