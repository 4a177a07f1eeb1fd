//! User-related custom validators.
//!
//! Each function carries the message for one field because the validator
//! derive does not pass the field name to custom functions. A field reports
//! only its first failing rule.

use validator::ValidationError;

use super::common::{is_alphanumeric, non_empty_string, rule_error, string_length};
use super::phone::is_valid_phone_number;

pub const CREDENTIAL_MIN_CHARS: usize = 3;
pub const CREDENTIAL_MAX_CHARS: usize = 30;
pub const ADDRESS_MIN_CHARS: usize = 10;
pub const ADDRESS_MAX_CHARS: usize = 100;

/// Non-empty, `[a-zA-Z0-9]` only, 3 to 30 characters; checked in that order.
fn credential(field: &str, value: &str) -> Result<(), ValidationError> {
    non_empty_string(field, value)?;
    if !is_alphanumeric(value) {
        return Err(rule_error(
            "alphanum",
            format!("{} must only contain alpha-numeric characters", field),
        ));
    }
    string_length(field, value, CREDENTIAL_MIN_CHARS, CREDENTIAL_MAX_CHARS)
}

fn phone_number(field: &str, value: &str) -> Result<(), ValidationError> {
    if is_valid_phone_number(value) {
        Ok(())
    } else {
        Err(rule_error(
            "phone_number",
            format!("{} did not seem to be a phone number", field),
        ))
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    credential("name", name)
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    credential("password", password)
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    non_empty_string("phone", phone)?;
    phone_number("phone", phone)
}

/// Empty means "no viber contact"; anything else must be a phone number.
pub fn validate_viber(viber: &str) -> Result<(), ValidationError> {
    if viber.is_empty() {
        return Ok(());
    }
    phone_number("viber", viber)
}

/// Empty means "no address"; otherwise 10 to 100 characters.
pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    if address.is_empty() {
        return Ok(());
    }
    string_length("address", address, ADDRESS_MIN_CHARS, ADDRESS_MAX_CHARS)
}
