//! Alert request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::AlertLevel;
use crate::validators::{validate_alert_message, validate_alert_title, FieldOrder};

/// Request payload for creating an alert
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateAlertRequest {
    /// Short headline (3-100 characters)
    #[validate(
        required(message = "title is required"),
        custom(function = "validate_alert_title")
    )]
    #[schema(example = "Planned outage")]
    pub title: Option<String>,
    /// Alert body (1-1000 characters)
    #[validate(
        required(message = "message is required"),
        custom(function = "validate_alert_message")
    )]
    #[schema(example = "Electricity will be off from 10:00 to 14:00.")]
    pub message: Option<String>,
    /// Defaults to `info`
    pub level: Option<AlertLevel>,
    /// Defaults to `true`
    pub active: Option<bool>,
}

impl FieldOrder for CreateAlertRequest {
    const FIELDS: &'static [&'static str] = &["title", "message", "level", "active"];
}

/// Request payload for partially updating an alert
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateAlertRequest {
    #[validate(custom(function = "validate_alert_title"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_alert_message"))]
    pub message: Option<String>,
    pub level: Option<AlertLevel>,
    pub active: Option<bool>,
}

impl FieldOrder for UpdateAlertRequest {
    const FIELDS: &'static [&'static str] = &["title", "message", "level", "active"];
}
