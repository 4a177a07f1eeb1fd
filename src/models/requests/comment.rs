//! Comment request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::required;
use crate::errors::ApiError;
use crate::models::NewComment;
use crate::validators::{validate_comment_text, FieldOrder};

/// Request payload for creating a comment
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCommentRequest {
    /// Id of the authoring user
    #[validate(
        required(message = "user_id is required"),
        range(min = 1, message = "user_id must be greater than or equal to 1")
    )]
    #[schema(example = 1)]
    pub user_id: Option<i64>,
    /// Comment body (1-1000 characters)
    #[validate(
        required(message = "text is required"),
        custom(function = "validate_comment_text")
    )]
    #[schema(example = "Water is back on in the building.")]
    pub text: Option<String>,
}

impl FieldOrder for CreateCommentRequest {
    const FIELDS: &'static [&'static str] = &["user_id", "text"];
}

// `ValidatedJson` has already enforced the `required` rules by the time this
// runs; the fallbacks only matter for callers that skip the pipe.
impl TryFrom<CreateCommentRequest> for NewComment {
    type Error = ApiError;

    fn try_from(req: CreateCommentRequest) -> Result<Self, Self::Error> {
        Ok(NewComment {
            user_id: required(req.user_id, "user_id")?,
            text: required(req.text, "text")?,
        })
    }
}

/// Request payload for partially updating a comment
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCommentRequest {
    #[validate(range(min = 1, message = "user_id must be greater than or equal to 1"))]
    pub user_id: Option<i64>,
    #[validate(custom(function = "validate_comment_text"))]
    pub text: Option<String>,
}

impl FieldOrder for UpdateCommentRequest {
    const FIELDS: &'static [&'static str] = &["user_id", "text"];
}
