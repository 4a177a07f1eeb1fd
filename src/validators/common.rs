//! Common validation utilities and helpers.

use validator::{ValidationError, ValidationErrors};

use crate::errors::ApiError;

/// Declared field order of a request schema.
///
/// Validation messages are reported in this order, so the first message
/// (the one surfaced as the response `message`) belongs to the first
/// failing field of the schema.
pub trait FieldOrder {
    const FIELDS: &'static [&'static str];
}

/// Convert validator errors to `ApiError::ValidationError`.
///
/// Fields listed in `order` come first, in that order; anything else
/// follows sorted by name.
///
/// # Example
/// ```ignore
/// body.validate().map_err(|e| validation_errors_to_api_error(e, T::FIELDS))?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors, order: &[&str]) -> ApiError {
    let rank = |field: &str| {
        order
            .iter()
            .position(|known| *known == field)
            .unwrap_or(order.len())
    };

    let mut fields: Vec<_> = e.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));

    let errors: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    ApiError::validation(errors)
}

pub(crate) fn rule_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// True when the value is non-empty and only contains `[a-zA-Z0-9]`.
pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Reject `""` the way a required string field is rejected.
pub fn non_empty_string(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule_error(
            "empty",
            format!("{} is not allowed to be empty", field),
        ));
    }
    Ok(())
}

/// Length bounds in characters, checked minimum first.
pub fn string_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        Err(rule_error(
            "min",
            format!("{} length must be at least {} characters long", field, min),
        ))
    } else if len > max {
        Err(rule_error(
            "max",
            format!(
                "{} length must be less than or equal to {} characters long",
                field, max
            ),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alphanumeric() {
        assert!(is_alphanumeric("john42"));
        assert!(!is_alphanumeric("john doe"));
        assert!(!is_alphanumeric("john_doe"));
        assert!(!is_alphanumeric("іван"));
        assert!(!is_alphanumeric(""));
    }

    #[test]
    fn test_string_length_messages() {
        assert!(string_length("name", "taras", 3, 30).is_ok());
        assert_eq!(
            string_length("name", "ta", 3, 30).unwrap_err().message.unwrap(),
            "name length must be at least 3 characters long"
        );
        assert_eq!(
            string_length("name", &"a".repeat(31), 3, 30)
                .unwrap_err()
                .message
                .unwrap(),
            "name length must be less than or equal to 30 characters long"
        );
    }

    #[test]
    fn test_errors_follow_schema_order() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "phone",
            rule_error("phone_number", "phone did not seem to be a phone number".into()),
        );
        errors.add(
            "email",
            rule_error("email", "email must be a valid email".into()),
        );
        errors.add("name", ValidationError::new("length"));
        errors.add("extra", ValidationError::new("unknown"));

        match validation_errors_to_api_error(errors, &["name", "password", "email", "phone"]) {
            ApiError::ValidationError { errors, .. } => assert_eq!(
                errors,
                vec![
                    "name is invalid".to_string(),
                    "email must be a valid email".to_string(),
                    "phone did not seem to be a phone number".to_string(),
                    "extra is invalid".to_string(),
                ]
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
