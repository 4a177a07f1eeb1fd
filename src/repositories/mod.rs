//! Repository layer for database operations.
//!
//! Services depend on the traits below; the MongoDB and PostgreSQL
//! implementations live in their own modules.

pub mod alert_repository;
pub mod comment_repository;
pub mod user_repository;

pub use alert_repository::MongoAlertRepository;
pub use comment_repository::SqlxCommentRepository;
pub use user_repository::MongoUserRepository;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::PersistenceError;
use crate::models::{Alert, AlertFilter, Comment, NewComment, User};

/// Users in the document store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Allocate the next numeric user id.
    async fn next_id(&self) -> Result<i64, PersistenceError>;
    async fn insert(&self, user: &User) -> Result<(), PersistenceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, PersistenceError>;
    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<User>, PersistenceError>;
    async fn count(&self) -> Result<u64, PersistenceError>;
    /// Overwrite the stored document with `user`. Returns false when no
    /// document has that id.
    async fn replace(&self, user: &User) -> Result<bool, PersistenceError>;
    async fn delete(&self, id: i64) -> Result<bool, PersistenceError>;
}

/// Alerts in the document store.
#[async_trait]
pub trait AlertRepository: Send + Sync {
    async fn insert(&self, alert: &Alert) -> Result<ObjectId, PersistenceError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Alert>, PersistenceError>;
    /// Newest first.
    async fn find_page(
        &self,
        filter: &AlertFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Alert>, PersistenceError>;
    async fn count(&self, filter: &AlertFilter) -> Result<u64, PersistenceError>;
    async fn replace(&self, alert: &Alert) -> Result<bool, PersistenceError>;
    async fn delete(&self, id: ObjectId) -> Result<bool, PersistenceError>;
}

/// Comments in the relational store.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, PersistenceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, PersistenceError>;
    /// Ordered by id, optionally restricted to one author.
    async fn find_page(
        &self,
        user_id: Option<i64>,
        offset: u64,
        limit: i64,
    ) -> Result<Vec<Comment>, PersistenceError>;
    async fn count(&self, user_id: Option<i64>) -> Result<u64, PersistenceError>;
    /// Write every column of `comment`; `None` when the row is gone.
    async fn update(&self, comment: &Comment) -> Result<Option<Comment>, PersistenceError>;
    async fn delete(&self, id: i64) -> Result<bool, PersistenceError>;
}
