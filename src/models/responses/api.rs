//! Envelope types shared by every endpoint.

use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::ApiError;

/// Success envelope: `{ success: true, message, data? }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_data(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope for operations with nothing to return, such as deletes.
    pub fn without_data(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    /// Machine-readable error code
    #[schema(example = "VALIDATION_FAILED")]
    pub code: String,
    /// First validation message, or the error description
    #[schema(example = "name is required")]
    pub message: String,
    /// Every validation message (validation failures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let errors = match err {
            ApiError::ValidationError { errors, .. } => Some(errors.clone()),
            _ => None,
        };

        Self {
            success: false,
            code: err.code().to_string(),
            message: err.message().to_string(),
            errors,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "Server is running")]
    pub message: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Server is running".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delete_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::<()>::without_data("User deleted")).unwrap();
        assert_eq!(body, json!({ "success": true, "message": "User deleted" }));
    }

    #[test]
    fn test_error_body_lists_validation_messages() {
        let err = ApiError::validation(vec!["email is required".into(), "name is required".into()]);
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "email is required");
        assert_eq!(body["errors"][1], "name is required");

        let body = serde_json::to_value(ErrorResponse::from(&ApiError::internal("boom"))).unwrap();
        assert!(body.get("errors").is_none());
    }
}
