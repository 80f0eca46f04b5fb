// Shared test fixtures for items.
//
// The create payload lives in json/create_item.json so HTTP, GraphQL and DTO
// tests all start from the same body.

use crate::modules::items::adapters::outbound::items_in_memory::InMemoryItemsStore;
use crate::modules::items::core::item::{Account, Attributes, Item, ItemStatus, ItemType, Party};
use crate::modules::items::use_cases::create_item::dto::ItemCreateDto;
use crate::shell::state::AppState;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use std::sync::Arc;

pub const CREATE_ITEM_JSON: &str = include_str!("json/create_item.json");

pub fn create_item_json() -> serde_json::Value {
    serde_json::from_str(CREATE_ITEM_JSON).unwrap()
}

pub fn create_item_dto() -> ItemCreateDto {
    serde_json::from_str(CREATE_ITEM_JSON).unwrap()
}

pub fn fixed_created_at() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
}

pub fn party(first_name: &str, last_name: &str, sort_code: &str, account_number: &str) -> Party {
    Party {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        account: Account {
            sort_code: sort_code.to_string(),
            account_number: account_number.to_string(),
        },
    }
}

pub fn make_test_state() -> (Arc<InMemoryItemsStore>, AppState) {
    let store = Arc::new(InMemoryItemsStore::new());
    let state = AppState::new(store.clone(), 10);
    (store, state)
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryItemsStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), 10)
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}

pub struct ItemBuilder {
    inner: Item,
}

impl Default for ItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemBuilder {
    pub fn new() -> Self {
        Self {
            inner: Item {
                guid: "item-fixed-0001".to_string(),
                index: 1,
                amount: 100.5,
                item_type: ItemType::Admission,
                status: ItemStatus::Accepted,
                created: fixed_created_at(),
                attributes: Attributes {
                    debtor: party("John", "Doe", "12-34-56", "12345678"),
                    beneficiary: party("Jane", "Roe", "65-43-21", "87654321"),
                },
            },
        }
    }

    pub fn guid(mut self, v: impl Into<String>) -> Self {
        self.inner.guid = v.into();
        self
    }

    pub fn index(mut self, v: usize) -> Self {
        self.inner.index = v;
        self
    }

    pub fn amount(mut self, v: f64) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn item_type(mut self, v: ItemType) -> Self {
        self.inner.item_type = v;
        self
    }

    pub fn status(mut self, v: ItemStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> Item {
        self.inner
    }
}

#[cfg(test)]
mod item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn the_json_fixture_describes_the_default_item() {
        let json = create_item_json();
        let item = ItemBuilder::default().build();
        assert_eq!(json["amount"], item.amount);
        assert_eq!(
            json["attributes"]["beneficiary"]["account"]["account_number"],
            item.attributes.beneficiary.account.account_number
        );
    }

    #[rstest]
    fn setters_override_the_defaults() {
        let item = ItemBuilder::new()
            .guid("g-9")
            .index(9)
            .amount(9.5)
            .item_type(ItemType::Reversal)
            .status(ItemStatus::Declined)
            .build();
        assert_eq!(item.guid, "g-9");
        assert_eq!(item.index, 9);
        assert_eq!(item.amount, 9.5);
        assert_eq!(item.item_type, ItemType::Reversal);
        assert_eq!(item.status, ItemStatus::Declined);
    }
}
