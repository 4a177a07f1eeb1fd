//! Alert repository backed by the `alerts` MongoDB collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, Document, Regex};
use mongodb::{Collection, Database};

use super::AlertRepository;
use crate::constants::{COLLECTION_ALERTS, ERR_FAILED_READ_INSERTED_ID};
use crate::errors::PersistenceError;
use crate::models::{Alert, AlertFilter};

pub struct MongoAlertRepository {
    collection: Collection<Alert>,
}

impl MongoAlertRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_ALERTS),
        }
    }
}

/// Translate list filters into a query document.
pub(crate) fn filter_document(filter: &AlertFilter) -> Document {
    let mut query = doc! {};

    if let Some(level) = filter.level {
        query.insert("level", level.to_string());
    }

    if let Some(active) = filter.active {
        query.insert("active", active);
    }

    if let Some(search) = &filter.search {
        query.insert(
            "title",
            doc! {
                "$regex": Regex {
                    pattern: regex::escape(search),
                    options: "i".to_string(),
                }
            },
        );
    }

    query
}

#[async_trait]
impl AlertRepository for MongoAlertRepository {
    async fn insert(&self, alert: &Alert) -> Result<ObjectId, PersistenceError> {
        let result = self.collection.insert_one(alert).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| PersistenceError::Backend(ERR_FAILED_READ_INSERTED_ID.to_string()))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Alert>, PersistenceError> {
        debug!("Repository: Finding alert by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_page(
        &self,
        filter: &AlertFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Alert>, PersistenceError> {
        let query = filter_document(filter);
        debug!("Repository: Finding alerts with filter: {:?}", query);
        let cursor = self
            .collection
            .find(query)
            .skip(skip)
            .limit(limit)
            .sort(doc! { "created_at": -1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, filter: &AlertFilter) -> Result<u64, PersistenceError> {
        Ok(self
            .collection
            .count_documents(filter_document(filter))
            .await?)
    }

    async fn replace(&self, alert: &Alert) -> Result<bool, PersistenceError> {
        let Some(id) = alert.id else {
            return Ok(false);
        };
        let result = self.collection.replace_one(doc! { "_id": id }, alert).await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, PersistenceError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
