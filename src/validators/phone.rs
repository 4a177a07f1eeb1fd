//! Phone number parsing shared by the `phone` and `viber` fields.
//!
//! Numbers without an international prefix are read as Ukrainian numbers and
//! every accepted number is stored in international format.

use phonenumber::{country, Mode, PhoneNumber};

pub const DEFAULT_PHONE_COUNTRY: country::Id = country::Id::UA;

/// Parse and check a phone number against the numbering plan metadata.
pub fn parse_phone_number(value: &str) -> Option<PhoneNumber> {
    let number = phonenumber::parse(Some(DEFAULT_PHONE_COUNTRY), value.trim()).ok()?;
    phonenumber::is_valid(&number).then_some(number)
}

pub fn is_valid_phone_number(value: &str) -> bool {
    parse_phone_number(value).is_some()
}

/// Render a number as e.g. `+32 494 32 24 56`. Unparseable input is returned
/// unchanged; validation runs before this is called.
pub fn to_international_format(value: &str) -> String {
    match parse_phone_number(value) {
        Some(number) => number.format().mode(Mode::International).to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_number() {
        assert!(is_valid_phone_number("+32 494 32 24 56"));
        assert_eq!(to_international_format("+32494322456"), "+32 494 32 24 56");
    }

    #[test]
    fn test_national_number_defaults_to_ukraine() {
        let number = parse_phone_number("050 123 4567").expect("valid UA number");
        assert_eq!(number.code().value(), 380);
        assert!(to_international_format("0501234567").starts_with("+380"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid_phone_number("not a phone"));
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number(""));
    }
}
