//! HTTP request handlers organized by domain.

pub mod alert_handler;
pub mod comment_handler;
pub mod health_handler;
pub mod user_handler;

pub use alert_handler::*;
pub use comment_handler::*;
pub use health_handler::*;
pub use user_handler::*;
