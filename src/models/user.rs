use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// User document stored in MongoDB.
///
/// `_id` is a sequential integer handed out by the `counters` collection so
/// that user routes take numeric ids.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,
    pub name: String,
    /// bcrypt hash, never sent to clients
    pub password: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// A user that passed the create schema, before hashing and id allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub email: String,
    pub phone: String,
    pub viber: Option<String>,
    pub address: Option<String>,
}
