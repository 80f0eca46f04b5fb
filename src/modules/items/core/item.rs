// Item aggregate and its value types.
//
// Purpose
// - Describe the persisted record exactly as it is served to clients.
//
// Responsibilities
// - Keep enum values canonical (upper-case) in memory and on the wire.
// - Stay free of validation and storage concerns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    Admission,
    Submission,
    Reversal,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Admission, ItemType::Submission, ItemType::Reversal];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Admission => "ADMISSION",
            ItemType::Submission => "SUBMISSION",
            ItemType::Reversal => "REVERSAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemStatus {
    Accepted,
    Declined,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 2] = [ItemStatus::Accepted, ItemStatus::Declined];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Accepted => "ACCEPTED",
            ItemStatus::Declined => "DECLINED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Parses the canonical upper-case spelling only. Case folding is the
/// job of the validators and normalizers upstream.
impl FromStr for ItemType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "item type",
                value: s.to_string(),
            })
    }
}

impl FromStr for ItemStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemStatus::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "item status",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub sort_code: String,
    pub account_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub first_name: String,
    pub last_name: String,
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub debtor: Party,
    pub beneficiary: Party,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub guid: String,
    pub index: usize,
    pub amount: f64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub status: ItemStatus,
    pub created: DateTime<Utc>,
    pub attributes: Attributes,
}

/// Validated input for a new item, before the store assigns identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub amount: f64,
    pub item_type: ItemType,
    pub status: ItemStatus,
    pub attributes: Attributes,
}

impl NewItem {
    pub fn materialize(self, guid: String, index: usize, created: DateTime<Utc>) -> Item {
        Item {
            guid,
            index,
            amount: self.amount,
            item_type: self.item_type,
            status: self.status,
            created,
            attributes: self.attributes,
        }
    }
}
