//! Success message constants used throughout the application.

// User messages
pub const MSG_USER_CREATED: &str = "User created successfully";
pub const MSG_USER_FOUND: &str = "User found";
pub const MSG_USER_UPDATED: &str = "User updated successfully";
pub const MSG_USER_DELETED: &str = "User deleted successfully";

// Comment messages
pub const MSG_COMMENT_CREATED: &str = "Comment created successfully";
pub const MSG_COMMENT_FOUND: &str = "Comment found";
pub const MSG_COMMENT_UPDATED: &str = "Comment updated successfully";
pub const MSG_COMMENT_DELETED: &str = "Comment deleted successfully";

// Alert messages
pub const MSG_ALERT_CREATED: &str = "Alert created successfully";
pub const MSG_ALERT_FOUND: &str = "Alert found";
pub const MSG_ALERT_UPDATED: &str = "Alert updated successfully";
pub const MSG_ALERT_DELETED: &str = "Alert deleted successfully";
