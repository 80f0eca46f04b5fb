// Untrusted attributes input shared by the create and update DTOs.
//
// Every field is optional on the wire so that a missing value is reported as
// "required" on its own dotted path instead of failing the whole body.

use crate::modules::items::core::item::{Account, Attributes, Party};
use crate::modules::items::core::validators::{
    INVALID_ACCOUNT_NUMBER, INVALID_SORT_CODE, validate_account_number, validate_sort_code,
};
use crate::shared::core::validation::{REQUIRED, ValidationErrors};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountDto {
    pub sort_code: Option<String>,
    pub account_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartyDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub account: Option<AccountDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttributesDto {
    pub debtor: Option<PartyDto>,
    pub beneficiary: Option<PartyDto>,
}

impl From<Attributes> for AttributesDto {
    fn from(attributes: Attributes) -> Self {
        Self {
            debtor: Some(attributes.debtor.into()),
            beneficiary: Some(attributes.beneficiary.into()),
        }
    }
}

impl From<Party> for PartyDto {
    fn from(party: Party) -> Self {
        Self {
            first_name: Some(party.first_name),
            last_name: Some(party.last_name),
            account: Some(AccountDto {
                sort_code: Some(party.account.sort_code),
                account_number: Some(party.account.account_number),
            }),
        }
    }
}

fn required_text(value: Option<&str>, path: &str, errors: &mut ValidationErrors) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text.to_string()),
        _ => {
            errors.push(path, REQUIRED);
            None
        }
    }
}

impl AccountDto {
    fn to_account(&self, path: &str, errors: &mut ValidationErrors) -> Option<Account> {
        let sort_code_path = format!("{path}.sort_code");
        let sort_code = required_text(self.sort_code.as_deref(), &sort_code_path, errors).and_then(|code| {
            if validate_sort_code(&code) {
                Some(code)
            } else {
                errors.push(sort_code_path.clone(), INVALID_SORT_CODE);
                None
            }
        });

        let number_path = format!("{path}.account_number");
        let account_number = required_text(self.account_number.as_deref(), &number_path, errors).and_then(|number| {
            if validate_account_number(&number) {
                Some(number)
            } else {
                errors.push(number_path.clone(), INVALID_ACCOUNT_NUMBER);
                None
            }
        });

        Some(Account {
            sort_code: sort_code?,
            account_number: account_number?,
        })
    }
}

impl PartyDto {
    fn to_party(&self, path: &str, errors: &mut ValidationErrors) -> Option<Party> {
        let first_name = required_text(self.first_name.as_deref(), &format!("{path}.first_name"), errors);
        let last_name = required_text(self.last_name.as_deref(), &format!("{path}.last_name"), errors);
        let account_path = format!("{path}.account");
        let account = match &self.account {
            Some(account) => account.to_account(&account_path, errors),
            None => {
                errors.push(account_path, REQUIRED);
                None
            }
        };
        Some(Party {
            first_name: first_name?,
            last_name: last_name?,
            account: account?,
        })
    }
}

impl AttributesDto {
    /// Validates every nested field, reporting failures under `path`
    /// (for example `attributes.debtor.account.sort_code`).
    pub fn to_attributes(&self, path: &str, errors: &mut ValidationErrors) -> Option<Attributes> {
        let debtor = party_at(self.debtor.as_ref(), &format!("{path}.debtor"), errors);
        let beneficiary = party_at(self.beneficiary.as_ref(), &format!("{path}.beneficiary"), errors);
        Some(Attributes {
            debtor: debtor?,
            beneficiary: beneficiary?,
        })
    }
}

fn party_at(party: Option<&PartyDto>, path: &str, errors: &mut ValidationErrors) -> Option<Party> {
    match party {
        Some(party) => party.to_party(path, errors),
        None => {
            errors.push(path, REQUIRED);
            None
        }
    }
}
