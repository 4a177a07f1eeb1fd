//! Request models for API endpoints.

pub mod alert;
pub mod comment;
pub mod query;
pub mod user;

pub use alert::*;
pub use comment::*;
pub use query::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// Keep "key present with `null`" apart from "key absent".
///
/// Absent fields fall back to `None` through `#[serde(default)]`; a present
/// field, `null` included, becomes `Some(..)`.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Treat `""` the same as a missing value.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, crate::errors::ApiError> {
    value.ok_or_else(|| crate::errors::ApiError::validation(vec![format!("{} is required", field)]))
}
