// Partial update payload.
//
// Every field is a Patch: absent (or null) leaves the stored value alone,
// present values must validate on their own.

use crate::modules::items::core::attributes_dto::AttributesDto;
use crate::modules::items::core::item::{Attributes, Item, ItemStatus, ItemType};
use crate::modules::items::use_cases::create_item::dto::{
    check_amount, check_item_status, check_item_type,
};
use crate::shared::core::patch::Patch;
use crate::shared::core::validation::ValidationErrors;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemUpdateDto {
    #[serde(default)]
    pub amount: Patch<f64>,
    #[serde(default, rename = "type")]
    pub item_type: Patch<String>,
    #[serde(default)]
    pub status: Patch<String>,
    #[serde(default)]
    pub attributes: Patch<AttributesDto>,
}

/// Validated, canonical changes to apply to a stored item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub amount: Patch<f64>,
    pub item_type: Patch<ItemType>,
    pub status: Patch<ItemStatus>,
    pub attributes: Patch<Attributes>,
}

pub fn normalize_update(dto: &mut ItemUpdateDto) {
    if let Patch::Set(item_type) = &mut dto.item_type {
        *item_type = item_type.to_uppercase();
    }
    if let Patch::Set(status) = &mut dto.status {
        *status = status.to_uppercase();
    }
}

/// Returns a copy of `existing` with the supplied fields overwritten.
/// `guid`, `index` and `created` are never touched.
pub fn apply_partial_update(existing: &Item, patch: ItemPatch) -> Item {
    let mut merged = existing.clone();
    patch.amount.apply_to(&mut merged.amount);
    patch.item_type.apply_to(&mut merged.item_type);
    patch.status.apply_to(&mut merged.status);
    patch.attributes.apply_to(&mut merged.attributes);
    merged
}

impl ItemUpdateDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.to_item_patch().map(|_| ())
    }

    pub fn into_item_patch(mut self) -> Result<ItemPatch, ValidationErrors> {
        normalize_update(&mut self);
        self.to_item_patch()
    }

    fn to_item_patch(&self) -> Result<ItemPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut patch = ItemPatch::default();

        if let Patch::Set(amount) = self.amount {
            patch.amount = check_amount(amount, &mut errors).into();
        }
        if let Patch::Set(raw) = &self.item_type {
            patch.item_type = check_item_type(raw, &mut errors).into();
        }
        if let Patch::Set(raw) = &self.status {
            patch.status = check_item_status(raw, &mut errors).into();
        }
        if let Patch::Set(attributes) = &self.attributes {
            patch.attributes = attributes.to_attributes("attributes", &mut errors).into();
        }

        errors.into_result().map(|_| patch)
    }
}
