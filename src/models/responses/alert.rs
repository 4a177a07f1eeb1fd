//! Alert response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::to_chrono;
use crate::models::{Alert, AlertLevel};

/// Alert returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct AlertResponse {
    /// Hex ObjectId
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub title: String,
    pub message: String,
    pub level: AlertLevel,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Alert> for AlertResponse {
    fn from(alert: Alert) -> Self {
        Self {
            id: alert.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: alert.title,
            message: alert.message,
            level: alert.level,
            active: alert.active,
            created_at: to_chrono(alert.created_at),
            updated_at: to_chrono(alert.updated_at),
        }
    }
}
