// Pure validators for enum tokens and account formats.
//
// Enum checks are case-insensitive; sort code and account number are digit-only.
// They report pass/fail only. DTO validation turns a failure into a field message.

use crate::modules::items::core::item::{ItemStatus, ItemType};
use regex::Regex;
use std::sync::LazyLock;

pub const INVALID_ITEM_TYPE: &str = "Invalid item type. Must be ADMISSION, SUBMISSION, or REVERSAL";
pub const INVALID_ITEM_STATUS: &str = "Invalid item status. Must be ACCEPTED or DECLINED";
pub const INVALID_SORT_CODE: &str = "Sort code must be in the format 00-00-00";
pub const INVALID_ACCOUNT_NUMBER: &str = "Must be exactly 8 digits";

static SORT_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{2}$").expect("Invalid sort code regex pattern"));

pub fn validate_item_type(value: &str) -> bool {
    value.to_uppercase().parse::<ItemType>().is_ok()
}

pub fn validate_item_status(value: &str) -> bool {
    value.to_uppercase().parse::<ItemStatus>().is_ok()
}

pub fn validate_sort_code(value: &str) -> bool {
    SORT_CODE_PATTERN.is_match(value)
}

pub fn validate_account_number(value: &str) -> bool {
    value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit())
}
