//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{AlertResponse, CommentResponse, Pagination, UserResponse};

/// Paginated list response
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    PaginatedUsers = PaginatedResponse<UserResponse>,
    PaginatedComments = PaginatedResponse<CommentResponse>,
    PaginatedAlerts = PaginatedResponse<AlertResponse>
)]
pub struct PaginatedResponse<T: Serialize> {
    /// Whether the request was successful
    pub success: bool,
    /// List of items
    pub data: Vec<T>,
    /// Total number of items
    pub total: u64,
    /// Current page number
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Total number of pages
    pub total_pages: u64,
}

impl<T: Serialize> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Self {
            success: true,
            data,
            total,
            page: pagination.page,
            per_page: pagination.per_page,
            total_pages: total.div_ceil(pagination.per_page),
        }
    }
}
