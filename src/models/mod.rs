//! Data models organized by type.

pub mod alert;
pub mod comment;
pub mod requests;
pub mod responses;
pub mod user;

pub use alert::*;
pub use comment::*;
pub use requests::*;
pub use responses::*;
pub use user::*;
