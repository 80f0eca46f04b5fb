// GraphQL types shared by the items use cases.
//
// Output objects mirror the JSON shape of an item. Input objects carry every
// field as optional and are converted into the same DTOs the HTTP adapters
// deserialize, so both surfaces share one validation path.

use async_graphql::{ErrorExtensions, InputObject, SimpleObject, Value};
use chrono::SecondsFormat;

use crate::modules::items::adapters::inbound::http::NOT_FOUND_MESSAGE;
use crate::modules::items::core::attributes_dto::{AccountDto, AttributesDto, PartyDto};
use crate::modules::items::core::errors::ApplicationError;
use crate::modules::items::core::item::{Account, Attributes, Item, Party};
use crate::modules::items::use_cases::create_item::dto::ItemCreateDto;
use crate::modules::items::use_cases::update_item::dto::ItemUpdateDto;
use crate::shared::core::patch::Patch;

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct GqlAccount {
    pub sort_code: String,
    pub account_number: String,
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct GqlParty {
    pub first_name: String,
    pub last_name: String,
    pub account: GqlAccount,
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct GqlAttributes {
    pub debtor: GqlParty,
    pub beneficiary: GqlParty,
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct GqlItem {
    pub guid: String,
    pub index: i64,
    pub amount: f64,
    #[graphql(name = "type")]
    pub item_type: String,
    pub status: String,
    pub created: String,
    pub attributes: GqlAttributes,
}

impl From<Account> for GqlAccount {
    fn from(account: Account) -> Self {
        Self {
            sort_code: account.sort_code,
            account_number: account.account_number,
        }
    }
}

impl From<Party> for GqlParty {
    fn from(party: Party) -> Self {
        Self {
            first_name: party.first_name,
            last_name: party.last_name,
            account: party.account.into(),
        }
    }
}

impl From<Attributes> for GqlAttributes {
    fn from(attributes: Attributes) -> Self {
        Self {
            debtor: attributes.debtor.into(),
            beneficiary: attributes.beneficiary.into(),
        }
    }
}

impl From<Item> for GqlItem {
    fn from(item: Item) -> Self {
        Self {
            guid: item.guid,
            index: i64::try_from(item.index).unwrap_or(i64::MAX),
            amount: item.amount,
            item_type: item.item_type.as_str().to_string(),
            status: item.status.as_str().to_string(),
            created: item.created.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            attributes: item.attributes.into(),
        }
    }
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct AccountInput {
    pub sort_code: Option<String>,
    pub account_number: Option<String>,
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct PartyInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub account: Option<AccountInput>,
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct AttributesInput {
    pub debtor: Option<PartyInput>,
    pub beneficiary: Option<PartyInput>,
}

#[derive(InputObject, Clone, Debug, Default)]
pub struct ItemCreateInput {
    pub amount: Option<f64>,
    #[graphql(name = "type")]
    pub item_type: Option<String>,
    pub status: Option<String>,
    pub attributes: Option<AttributesInput>,
}

/// Omitted and null fields both leave the stored value unchanged.
#[derive(InputObject, Clone, Debug, Default)]
pub struct ItemUpdateInput {
    pub amount: Option<f64>,
    #[graphql(name = "type")]
    pub item_type: Option<String>,
    pub status: Option<String>,
    pub attributes: Option<AttributesInput>,
}

impl From<AccountInput> for AccountDto {
    fn from(input: AccountInput) -> Self {
        Self {
            sort_code: input.sort_code,
            account_number: input.account_number,
        }
    }
}

impl From<PartyInput> for PartyDto {
    fn from(input: PartyInput) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            account: input.account.map(Into::into),
        }
    }
}

impl From<AttributesInput> for AttributesDto {
    fn from(input: AttributesInput) -> Self {
        Self {
            debtor: input.debtor.map(Into::into),
            beneficiary: input.beneficiary.map(Into::into),
        }
    }
}

impl From<ItemCreateInput> for ItemCreateDto {
    fn from(input: ItemCreateInput) -> Self {
        Self {
            amount: input.amount,
            item_type: input.item_type,
            status: input.status,
            attributes: input.attributes.map(Into::into),
        }
    }
}

impl From<ItemUpdateInput> for ItemUpdateDto {
    fn from(input: ItemUpdateInput) -> Self {
        Self {
            amount: Patch::from(input.amount),
            item_type: Patch::from(input.item_type),
            status: Patch::from(input.status),
            attributes: Patch::from(input.attributes.map(AttributesDto::from)),
        }
    }
}

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> async_graphql::Error {
        match self {
            ApplicationError::Validation(errors) => {
                let fields = serde_json::to_value(errors.to_map())
                    .ok()
                    .and_then(|json| Value::from_json(json).ok())
                    .unwrap_or(Value::Null);
                async_graphql::Error::new("validation failed").extend_with(|_, e| {
                    e.set("code", "VALIDATION_FAILED");
                    e.set("fields", fields);
                })
            }
            ApplicationError::InvalidArgument(message) => async_graphql::Error::new(message.as_str())
                .extend_with(|_, e| e.set("code", "BAD_REQUEST")),
            ApplicationError::NotFound(_) => async_graphql::Error::new(NOT_FOUND_MESSAGE)
                .extend_with(|_, e| e.set("code", "NOT_FOUND")),
            ApplicationError::Store(_) | ApplicationError::Unexpected(_) => {
                tracing::error!(error = %self, "graphql request failed");
                async_graphql::Error::new("internal server error")
                    .extend_with(|_, e| e.set("code", "INTERNAL"))
            }
        }
    }
}
