//! Validation rules backing the request schemas.

pub mod common;
pub mod content;
pub mod phone;
pub mod user;

pub use common::*;
pub use content::*;
pub use phone::*;
pub use user::*;
