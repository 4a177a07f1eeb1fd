//! Alert handlers.

use actix_web::{web, HttpResponse};

use crate::constants::{
    CODE_ALERT_NOT_FOUND, ERR_ALERT_NOT_FOUND, MSG_ALERT_CREATED, MSG_ALERT_DELETED,
    MSG_ALERT_FOUND, MSG_ALERT_UPDATED,
};
use crate::errors::ApiError;
use crate::middleware::ValidatedJson;
use crate::models::{
    AlertListQuery, AlertResponse, ApiResponse, CreateAlertRequest, PaginatedResponse,
    UpdateAlertRequest,
};
use crate::services::AlertService;

/// Create an alert
#[utoipa::path(
    post,
    path = "/alerts",
    tag = "Alerts",
    request_body = CreateAlertRequest,
    responses(
        (status = 201, description = "Alert created", body = AlertResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_alert(
    alert_service: web::Data<AlertService>,
    body: ValidatedJson<CreateAlertRequest>,
) -> Result<HttpResponse, ApiError> {
    let alert = alert_service.create_alert(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::with_data(
        MSG_ALERT_CREATED,
        AlertResponse::from(alert),
    )))
}

/// List alerts, newest first
#[utoipa::path(
    get,
    path = "/alerts",
    tag = "Alerts",
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)"),
        ("level" = Option<String>, Query, description = "Filter by level: info, warning or critical"),
        ("active" = Option<bool>, Query, description = "Filter by active flag"),
        ("search" = Option<String>, Query, description = "Case-insensitive search in titles")
    ),
    responses(
        (status = 200, description = "List of alerts", body = crate::models::PaginatedAlerts)
    )
)]
pub async fn get_alerts(
    alert_service: web::Data<AlertService>,
    query: web::Query<AlertListQuery>,
) -> Result<HttpResponse, ApiError> {
    let pagination = query.pagination();
    let (alerts, total) = alert_service
        .list_alerts(query.filter(), pagination)
        .await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(alerts, total, pagination)))
}

#[utoipa::path(
    get,
    path = "/alerts/{id}",
    tag = "Alerts",
    params(
        ("id" = String, Path, description = "Alert ObjectId")
    ),
    responses(
        (status = 200, description = "Alert found", body = AlertResponse),
        (status = 400, description = "Malformed id", body = crate::models::ErrorResponse),
        (status = 404, description = "Alert not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_alert(
    alert_service: web::Data<AlertService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let alert = alert_service
        .get_alert(&path)
        .await?
        .ok_or_else(|| ApiError::not_found(CODE_ALERT_NOT_FOUND, ERR_ALERT_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data(
        MSG_ALERT_FOUND,
        AlertResponse::from(alert),
    )))
}

#[utoipa::path(
    patch,
    path = "/alerts/{id}",
    tag = "Alerts",
    params(
        ("id" = String, Path, description = "Alert ObjectId")
    ),
    request_body = UpdateAlertRequest,
    responses(
        (status = 200, description = "Alert updated", body = AlertResponse),
        (status = 400, description = "Validation error or malformed id", body = crate::models::ErrorResponse),
        (status = 404, description = "Alert not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_alert(
    alert_service: web::Data<AlertService>,
    path: web::Path<String>,
    body: ValidatedJson<UpdateAlertRequest>,
) -> Result<HttpResponse, ApiError> {
    let alert = alert_service
        .update_alert(&path, body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_data(
        MSG_ALERT_UPDATED,
        AlertResponse::from(alert),
    )))
}

#[utoipa::path(
    delete,
    path = "/alerts/{id}",
    tag = "Alerts",
    params(
        ("id" = String, Path, description = "Alert ObjectId")
    ),
    responses(
        (status = 200, description = "Alert deleted"),
        (status = 400, description = "Malformed id", body = crate::models::ErrorResponse),
        (status = 404, description = "Alert not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_alert(
    alert_service: web::Data<AlertService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    alert_service.delete_alert(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::without_data(MSG_ALERT_DELETED)))
}
