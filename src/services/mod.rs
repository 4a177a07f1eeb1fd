//! Services organized by domain concern.

pub mod alert_service;
pub mod comment_service;
pub mod password;
pub mod user_service;

pub use alert_service::AlertService;
pub use comment_service::CommentService;
pub use user_service::UserService;
