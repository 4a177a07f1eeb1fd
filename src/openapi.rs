use utoipa::OpenApi;

use crate::models::{
    AlertLevel, AlertResponse, CommentResponse, CreateAlertRequest, CreateCommentRequest,
    CreateUserRequest, ErrorResponse, HealthResponse, PaginatedAlerts, PaginatedComments,
    PaginatedUsers, UpdateAlertRequest, UpdateCommentRequest, UpdateUserRequest, UserResponse,
};

/// OpenAPI documentation for the community API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Community API",
        version = "0.1.0",
        description = "CRUD endpoints for users and alerts (MongoDB) and comments (PostgreSQL).",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD with partial updates"),
        (name = "Comments", description = "Comments stored in the relational database"),
        (name = "Alerts", description = "Alerts stored in the document database")
    ),
    paths(
        crate::handlers::health_check,
        crate::handlers::create_user,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::handlers::create_comment,
        crate::handlers::get_comments,
        crate::handlers::get_comment,
        crate::handlers::update_comment,
        crate::handlers::delete_comment,
        crate::handlers::create_alert,
        crate::handlers::get_alerts,
        crate::handlers::get_alert,
        crate::handlers::update_alert,
        crate::handlers::delete_alert
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            PaginatedUsers,
            CreateCommentRequest,
            UpdateCommentRequest,
            CommentResponse,
            PaginatedComments,
            CreateAlertRequest,
            UpdateAlertRequest,
            AlertLevel,
            AlertResponse,
            PaginatedAlerts,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/users",
            "/users/{id}",
            "/comments",
            "/comments/{id}",
            "/alerts",
            "/alerts/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
