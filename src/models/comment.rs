use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of the `comments` table in PostgreSQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    /// Author; refers to `users._id` in the document store.
    pub user_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Columns supplied by the caller when inserting a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub user_id: i64,
    pub text: String,
}
