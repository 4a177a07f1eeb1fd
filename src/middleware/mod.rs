//! Request pipes that run before handlers.
//!
//! `ValidatedJson<T>` deserialises and validates a JSON body;
//! `NumericId` parses an integer `{id}` path segment.

pub mod path_id;
pub mod validation;

pub use path_id::NumericId;
pub use validation::{query_config, ValidatedJson};
