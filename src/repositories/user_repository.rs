//! User repository for all MongoDB operations related to users.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};

use super::UserRepository;
use crate::constants::{
    COLLECTION_COUNTERS, COLLECTION_USERS, COUNTER_USERS, ERR_FAILED_ALLOCATE_USER_ID,
};
use crate::errors::PersistenceError;
use crate::models::User;

/// MongoDB-backed user storage.
pub struct MongoUserRepository {
    collection: Collection<User>,
    counters: Collection<Document>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
            counters: db.collection(COLLECTION_COUNTERS),
        }
    }

    /// Create the unique index on `email`.
    ///
    /// Called once during startup. Inserting a second user with the same
    /// email then fails with server code 11000.
    pub async fn create_indexes(&self) -> Result<(), PersistenceError> {
        info!("Creating database indexes for users collection...");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(email_index).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn next_id(&self) -> Result<i64, PersistenceError> {
        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": COUNTER_USERS },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        counter
            .and_then(|doc| doc.get_i64("seq").ok())
            .ok_or_else(|| PersistenceError::Backend(ERR_FAILED_ALLOCATE_USER_ID.to_string()))
    }

    async fn insert(&self, user: &User) -> Result<(), PersistenceError> {
        debug!("Repository: Inserting user with id: {}", user.id);
        self.collection.insert_one(user).await?;
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, PersistenceError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<User>, PersistenceError> {
        let cursor = self
            .collection
            .find(doc! {})
            .skip(skip)
            .limit(limit)
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn count(&self) -> Result<u64, PersistenceError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn replace(&self, user: &User) -> Result<bool, PersistenceError> {
        debug!("Repository: Replacing user with id: {}", user.id);
        let result = self
            .collection
            .replace_one(doc! { "_id": user.id }, user)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, PersistenceError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
