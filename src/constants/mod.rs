//! Application constants module.
//!
//! This module centralizes all constant strings used throughout the application,
//! including error codes, error messages, success messages, storage names and
//! pagination defaults.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod pagination;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
