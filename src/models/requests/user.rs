//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{double_option, non_empty, required};
use crate::errors::ApiError;
use crate::models::NewUser;
use crate::validators::{
    validate_address, validate_name, validate_password, validate_phone, validate_viber,
    FieldOrder,
};

const USER_FIELDS: &[&str] = &["name", "password", "email", "phone", "viber", "address"];

/// Request payload for creating a user
///
/// Keys outside the schema are rejected.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    /// Display name (3-30 alphanumeric characters)
    #[validate(
        required(message = "name is required"),
        custom(function = "validate_name")
    )]
    #[schema(example = "taras")]
    pub name: Option<String>,
    /// Password (3-30 alphanumeric characters)
    #[validate(
        required(message = "password is required"),
        custom(function = "validate_password")
    )]
    #[schema(example = "secret123")]
    pub password: Option<String>,
    /// Email address, unique across users
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid email")
    )]
    #[schema(example = "taras@example.com")]
    pub email: Option<String>,
    /// Phone number; national numbers are read as Ukrainian
    #[validate(
        required(message = "phone is required"),
        custom(function = "validate_phone")
    )]
    #[schema(example = "+380 50 123 4567")]
    pub phone: Option<String>,
    /// Viber number; the key is required but may be `null` or empty
    #[serde(default, deserialize_with = "double_option")]
    #[validate(
        required(message = "viber is required"),
        custom(function = "validate_viber")
    )]
    #[schema(value_type = Option<String>, example = "+32 494 32 24 56")]
    pub viber: Option<Option<String>>,
    /// Postal address (10-100 characters), may be `null` or empty
    #[serde(default)]
    #[validate(custom(function = "validate_address"))]
    #[schema(example = "Khreshchatyk 1, Kyiv")]
    pub address: Option<String>,
}

impl FieldOrder for CreateUserRequest {
    const FIELDS: &'static [&'static str] = USER_FIELDS;
}

// The `required` fallbacks are unreachable behind `ValidatedJson`; they keep
// the conversion total for callers that build requests directly.
impl TryFrom<CreateUserRequest> for NewUser {
    type Error = ApiError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(NewUser {
            name: required(req.name, "name")?,
            password: required(req.password, "password")?,
            email: required(req.email, "email")?,
            phone: required(req.phone, "phone")?,
            viber: non_empty(required(req.viber, "viber")?),
            address: non_empty(req.address),
        })
    }
}

/// Request payload for partially updating a user
///
/// Omitted fields keep their stored value. `viber` and `address` set to
/// `null` or `""` clear the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "taras")]
    pub name: Option<String>,
    #[validate(custom(function = "validate_password"))]
    #[schema(example = "newsecret456")]
    pub password: Option<String>,
    #[validate(email(message = "email must be a valid email"))]
    #[schema(example = "taras@example.org")]
    pub email: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    #[schema(example = "+380 67 765 4321")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(custom(function = "validate_viber"))]
    #[schema(value_type = Option<String>, example = "+380 67 765 4321")]
    pub viber: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(custom(function = "validate_address"))]
    #[schema(value_type = Option<String>, example = "Svobody Ave 28, Lviv")]
    pub address: Option<Option<String>>,
}

impl FieldOrder for UpdateUserRequest {
    const FIELDS: &'static [&'static str] = USER_FIELDS;
}
