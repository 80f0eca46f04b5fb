// Create payload as received from clients.
//
// Purpose
// - Accept an untrusted body and turn it into a validated, canonical NewItem.
//
// Responsibilities
// - Report every invalid field with a dotted path and a readable message.
// - Upper-case enum tokens before they reach the store.

use crate::modules::items::core::attributes_dto::AttributesDto;
use crate::modules::items::core::item::{ItemStatus, ItemType, NewItem};
use crate::modules::items::core::validators::{
    INVALID_ITEM_STATUS, INVALID_ITEM_TYPE, validate_item_status, validate_item_type,
};
use crate::shared::core::validation::{MUST_BE_POSITIVE, REQUIRED, ValidationErrors};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemCreateDto {
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub status: Option<String>,
    pub attributes: Option<AttributesDto>,
}

pub fn normalize_create(dto: &mut ItemCreateDto) {
    if let Some(item_type) = dto.item_type.as_mut() {
        *item_type = item_type.to_uppercase();
    }
    if let Some(status) = dto.status.as_mut() {
        *status = status.to_uppercase();
    }
}

pub(crate) fn check_amount(amount: f64, errors: &mut ValidationErrors) -> Option<f64> {
    if amount.is_nan() || amount <= 0.0 {
        errors.push("amount", MUST_BE_POSITIVE);
        return None;
    }
    Some(amount)
}

pub(crate) fn check_item_type(raw: &str, errors: &mut ValidationErrors) -> Option<ItemType> {
    if !validate_item_type(raw) {
        errors.push("type", INVALID_ITEM_TYPE);
        return None;
    }
    raw.to_uppercase().parse().ok()
}

pub(crate) fn check_item_status(raw: &str, errors: &mut ValidationErrors) -> Option<ItemStatus> {
    if !validate_item_status(raw) {
        errors.push("status", INVALID_ITEM_STATUS);
        return None;
    }
    raw.to_uppercase().parse().ok()
}

fn required<'a, T>(value: Option<&'a T>, field: &str, errors: &mut ValidationErrors) -> Option<&'a T> {
    if value.is_none() {
        errors.push(field, REQUIRED);
    }
    value
}

impl ItemCreateDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.to_new_item().map(|_| ())
    }

    /// Normalizes, validates and maps into the domain input in one step.
    pub fn into_new_item(mut self) -> Result<NewItem, ValidationErrors> {
        normalize_create(&mut self);
        self.to_new_item()
    }

    fn to_new_item(&self) -> Result<NewItem, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let amount = required(self.amount.as_ref(), "amount", &mut errors)
            .and_then(|amount| check_amount(*amount, &mut errors));

        let item_type = match self.item_type.as_deref() {
            Some(raw) if !raw.trim().is_empty() => check_item_type(raw, &mut errors),
            _ => {
                errors.push("type", REQUIRED);
                None
            }
        };

        let status = match self.status.as_deref() {
            Some(raw) if !raw.trim().is_empty() => check_item_status(raw, &mut errors),
            _ => {
                errors.push("status", REQUIRED);
                None
            }
        };

        let attributes = required(self.attributes.as_ref(), "attributes", &mut errors)
            .and_then(|attributes| attributes.to_attributes("attributes", &mut errors));

        match (amount, item_type, status, attributes) {
            (Some(amount), Some(item_type), Some(status), Some(attributes)) if errors.is_empty() => {
                Ok(NewItem {
                    amount,
                    item_type,
                    status,
                    attributes,
                })
            }
            _ => Err(errors),
        }
    }
}
