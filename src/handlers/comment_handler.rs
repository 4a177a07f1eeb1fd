//! Comment handlers.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::constants::{
    CODE_COMMENT_NOT_FOUND, ERR_COMMENT_NOT_FOUND, MSG_COMMENT_CREATED, MSG_COMMENT_DELETED,
    MSG_COMMENT_FOUND, MSG_COMMENT_UPDATED,
};
use crate::errors::ApiError;
use crate::middleware::{NumericId, ValidatedJson};
use crate::models::{
    ApiResponse, CommentListQuery, CommentResponse, CreateCommentRequest, PaginatedResponse,
    UpdateCommentRequest,
};
use crate::services::CommentService;

/// Create a comment
#[utoipa::path(
    post,
    path = "/comments",
    tag = "Comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_comment(
    comment_service: web::Data<CommentService>,
    body: ValidatedJson<CreateCommentRequest>,
) -> Result<HttpResponse, ApiError> {
    let comment = comment_service.create_comment(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::with_data(
        MSG_COMMENT_CREATED,
        CommentResponse::from(comment),
    )))
}

/// List comments, optionally for one author
#[utoipa::path(
    get,
    path = "/comments",
    tag = "Comments",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("user_id" = Option<i64>, Query, description = "Only comments by this user")
    ),
    responses(
        (status = 200, description = "List of comments", body = crate::models::PaginatedComments)
    )
)]
pub async fn get_comments(
    comment_service: web::Data<CommentService>,
    query: web::Query<CommentListQuery>,
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (comments, total) = comment_service
        .list_comments(query.user_id, pagination)
        .await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(comments, total, pagination)))
}

#[utoipa::path(
    get,
    path = "/comments/{id}",
    tag = "Comments",
    params(
        ("id" = i64, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment found", body = CommentResponse),
        (status = 404, description = "Comment not found", body = crate::models::ErrorResponse),
        (status = 406, description = "Id is not numeric", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_comment(
    comment_service: web::Data<CommentService>,
    id: NumericId,
) -> Result<HttpResponse, ApiError> {
    let comment_id = id.into_inner();
    debug!("Fetching comment with id: {}", comment_id);

    let comment = comment_service
        .get_comment(comment_id)
        .await?
        .ok_or_else(|| ApiError::not_found(CODE_COMMENT_NOT_FOUND, ERR_COMMENT_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data(
        MSG_COMMENT_FOUND,
        CommentResponse::from(comment),
    )))
}

#[utoipa::path(
    patch,
    path = "/comments/{id}",
    tag = "Comments",
    params(
        ("id" = i64, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 404, description = "Comment not found", body = crate::models::ErrorResponse),
        (status = 406, description = "Id is not numeric", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_comment(
    comment_service: web::Data<CommentService>,
    id: NumericId,
    body: ValidatedJson<UpdateCommentRequest>,
) -> Result<HttpResponse, ApiError> {
    let comment = comment_service
        .update_comment(id.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data(
        MSG_COMMENT_UPDATED,
        CommentResponse::from(comment),
    )))
}

#[utoipa::path(
    delete,
    path = "/comments/{id}",
    tag = "Comments",
    params(
        ("id" = i64, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted"),
        (status = 404, description = "Comment not found", body = crate::models::ErrorResponse),
        (status = 406, description = "Id is not numeric", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_comment(
    comment_service: web::Data<CommentService>,
    id: NumericId,
) -> Result<HttpResponse, ApiError> {
    comment_service.delete_comment(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::without_data(MSG_COMMENT_DELETED)))
}
