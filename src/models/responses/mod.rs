//! Response models for API endpoints.

pub mod alert;
pub mod api;
pub mod comment;
pub mod pagination;
pub mod user;

pub use alert::*;
pub use api::*;
pub use comment::*;
pub use pagination::*;
pub use user::*;

use chrono::{DateTime, Utc};

pub(crate) fn to_chrono(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}
