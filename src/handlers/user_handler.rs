//! User handlers: create, list, fetch, partial update, delete.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};

use crate::constants::{
    CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND, MSG_USER_CREATED, MSG_USER_DELETED,
    MSG_USER_FOUND, MSG_USER_UPDATED,
};
use crate::errors::ApiError;
use crate::middleware::{NumericId, ValidatedJson};
use crate::models::{
    ApiResponse, CreateUserRequest, PaginatedResponse, UpdateUserRequest, UserListQuery,
    UserResponse,
};
use crate::services::UserService;

/// Create a user
///
/// The password is hashed before storage and never returned.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error, duplicate email or storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: ValidatedJson<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.create_user(body.into_inner()).await?;
    let user_response: UserResponse = user.into();

    Ok(HttpResponse::Created().json(ApiResponse::with_data(MSG_USER_CREATED, user_response)))
}

/// List users with pagination
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "List of users", body = crate::models::PaginatedUsers)
    )
)]
pub async fn get_users(
    user_service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (users, total) = user_service.list_users(pagination).await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(users, total, pagination)))
}

/// Get a user by numeric id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 406, description = "Id is not numeric", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    id: NumericId,
) -> Result<HttpResponse, ApiError> {
    let user_id = id.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.get_user(user_id).await?.ok_or_else(|| {
        warn!("User not found with id: {}", user_id);
        ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND)
    })?;

    let user_response: UserResponse = user.into();
    Ok(HttpResponse::Ok().json(ApiResponse::with_data(MSG_USER_FOUND, user_response)))
}

/// Partially update a user
///
/// The stored user is merged with the payload and written back as a whole.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error or user not found", body = crate::models::ErrorResponse),
        (status = 406, description = "Id is not numeric", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    id: NumericId,
    body: ValidatedJson<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = id.into_inner();
    let updated_user = user_service
        .update_user(user_id, body.into_inner())
        .await?;
    let user_response: UserResponse = updated_user.into();

    info!("Successfully updated user: {}", user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::with_data(MSG_USER_UPDATED, user_response)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 406, description = "Id is not numeric", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    id: NumericId,
) -> Result<HttpResponse, ApiError> {
    user_service.delete_user(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::without_data(MSG_USER_DELETED)))
}
