//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found!";
pub const ERR_EMAIL_REGISTERED: &str = "User with this email is already registered.";
pub const ERR_FAILED_ALLOCATE_USER_ID: &str = "Failed to allocate a user id";

// Comment errors
pub const ERR_COMMENT_NOT_FOUND: &str = "Comment not found";

// Alert errors
pub const ERR_ALERT_NOT_FOUND: &str = "Alert not found";
pub const ERR_INVALID_ALERT_ID: &str = "Invalid alert ID format";
pub const ERR_FAILED_READ_INSERTED_ID: &str = "Inserted document has no ObjectId";

// Validation errors
pub const ERR_NUMERIC_ID_EXPECTED: &str = "Validation failed (numeric string is expected)";
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
