//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_PAYLOAD: &str = "INVALID_PAYLOAD";
pub const CODE_NUMERIC_ID_EXPECTED: &str = "NUMERIC_ID_EXPECTED";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_EMAIL_EXISTS: &str = "EMAIL_EXISTS";

// Comment errors
pub const CODE_COMMENT_NOT_FOUND: &str = "COMMENT_NOT_FOUND";

// Alert errors
pub const CODE_ALERT_NOT_FOUND: &str = "ALERT_NOT_FOUND";
pub const CODE_INVALID_ALERT_ID: &str = "INVALID_ALERT_ID";

// Persistence errors
pub const CODE_DUPLICATE_KEY: &str = "DUPLICATE_KEY";
pub const CODE_PERSISTENCE_FAILED: &str = "PERSISTENCE_FAILED";

// Generic errors
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
