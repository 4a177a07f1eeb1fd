//! Names of MongoDB collections and PostgreSQL tables.

pub const COLLECTION_USERS: &str = "users";
pub const COLLECTION_ALERTS: &str = "alerts";
pub const COLLECTION_COUNTERS: &str = "counters";

/// Key of the sequence document that hands out user ids.
pub const COUNTER_USERS: &str = "users";

pub const TABLE_COMMENTS: &str = "comments";
