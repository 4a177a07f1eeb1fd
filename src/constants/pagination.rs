//! Pagination defaults shared by the user, comment and alert list endpoints.

/// Items per page when the request does not say.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound on `per_page`; larger values are clamped.
pub const MAX_PAGE_SIZE: u64 = 100;

/// First page number. Pages are 1-based.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;
