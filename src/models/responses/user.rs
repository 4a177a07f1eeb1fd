//! User-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::to_chrono;
use crate::models::User;

/// User data returned in API responses (the password hash is never included)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserResponse {
    /// User's numeric identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "taras")]
    pub name: String,
    #[schema(example = "taras@example.com")]
    pub email: String,
    /// International format
    #[schema(example = "+380 50 123 4567")]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            viber: user.viber,
            address: user.address,
            created_at: to_chrono(user.created_at),
            updated_at: to_chrono(user.updated_at),
        }
    }
}
