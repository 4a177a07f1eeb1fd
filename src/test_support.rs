//! In-memory repositories used by service and handler tests.

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::errors::PersistenceError;
use crate::models::{Alert, AlertFilter, Comment, NewComment, User};
use crate::repositories::{AlertRepository, CommentRepository, UserRepository};

/// Lowest cost bcrypt accepts; keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

fn page<T: Clone>(items: Vec<T>, skip: u64, limit: i64) -> Vec<T> {
    items
        .into_iter()
        .skip(skip as usize)
        .take(limit.max(0) as usize)
        .collect()
}

#[derive(Default)]
struct UserState {
    users: BTreeMap<i64, User>,
    sequence: i64,
    fail_next_write: Option<PersistenceError>,
}

/// Enforces the unique email index like the MongoDB collection does.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<UserState>,
}

impl InMemoryUserRepository {
    /// Make the next insert or replace fail with `err`.
    pub fn fail_next_write(&self, err: PersistenceError) {
        self.state.lock().unwrap().fail_next_write = Some(err);
    }
}

fn duplicate_email(state: &UserState, user: &User) -> Option<PersistenceError> {
    state
        .users
        .values()
        .any(|other| other.id != user.id && other.email == user.email)
        .then(|| {
            PersistenceError::DuplicateKey(format!(
                "E11000 duplicate key error collection: users index: email_1 dup key: {{ email: \"{}\" }}",
                user.email
            ))
        })
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn next_id(&self) -> Result<i64, PersistenceError> {
        let mut state = self.state.lock().unwrap();
        state.sequence += 1;
        Ok(state.sequence)
    }

    async fn insert(&self, user: &User) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.fail_next_write.take() {
            return Err(err);
        }
        if let Some(err) = duplicate_email(&state, user) {
            return Err(err);
        }
        state.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, PersistenceError> {
        Ok(self.state.lock().unwrap().users.get(&id).cloned())
    }

    async fn find_page(&self, skip: u64, limit: i64) -> Result<Vec<User>, PersistenceError> {
        let users = self.state.lock().unwrap().users.values().cloned().collect();
        Ok(page(users, skip, limit))
    }

    async fn count(&self) -> Result<u64, PersistenceError> {
        Ok(self.state.lock().unwrap().users.len() as u64)
    }

    async fn replace(&self, user: &User) -> Result<bool, PersistenceError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.fail_next_write.take() {
            return Err(err);
        }
        if !state.users.contains_key(&user.id) {
            return Ok(false);
        }
        if let Some(err) = duplicate_email(&state, user) {
            return Err(err);
        }
        state.users.insert(user.id, user.clone());
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, PersistenceError> {
        Ok(self.state.lock().unwrap().users.remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryAlertRepository {
    alerts: Mutex<Vec<Alert>>,
}

fn matches(filter: &AlertFilter, alert: &Alert) -> bool {
    filter.level.map_or(true, |level| alert.level == level)
        && filter.active.map_or(true, |active| alert.active == active)
        && filter.search.as_ref().map_or(true, |search| {
            alert.title.to_lowercase().contains(&search.to_lowercase())
        })
}

#[async_trait]
impl AlertRepository for InMemoryAlertRepository {
    async fn insert(&self, alert: &Alert) -> Result<ObjectId, PersistenceError> {
        let id = ObjectId::new();
        let mut stored = alert.clone();
        stored.id = Some(id);
        self.alerts.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Alert>, PersistenceError> {
        Ok(self
            .alerts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == Some(id))
            .cloned())
    }

    async fn find_page(
        &self,
        filter: &AlertFilter,
        skip: u64,
        limit: i64,
    ) -> Result<Vec<Alert>, PersistenceError> {
        // Insertion order reversed stands in for "newest first".
        let alerts = self
            .alerts
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|a| matches(filter, a))
            .cloned()
            .collect();
        Ok(page(alerts, skip, limit))
    }

    async fn count(&self, filter: &AlertFilter) -> Result<u64, PersistenceError> {
        Ok(self
            .alerts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| matches(filter, a))
            .count() as u64)
    }

    async fn replace(&self, alert: &Alert) -> Result<bool, PersistenceError> {
        let mut alerts = self.alerts.lock().unwrap();
        match alerts.iter_mut().find(|a| a.id.is_some() && a.id == alert.id) {
            Some(stored) => {
                *stored = alert.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, PersistenceError> {
        let mut alerts = self.alerts.lock().unwrap();
        let before = alerts.len();
        alerts.retain(|a| a.id != Some(id));
        Ok(alerts.len() != before)
    }
}

#[derive(Default)]
struct CommentState {
    rows: BTreeMap<i64, Comment>,
    sequence: i64,
}

/// Mimics the BIGSERIAL id column of the `comments` table.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    state: Mutex<CommentState>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, PersistenceError> {
        let mut state = self.state.lock().unwrap();
        state.sequence += 1;
        let now = Utc::now();
        let row = Comment {
            id: state.sequence,
            user_id: comment.user_id,
            text: comment.text.clone(),
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, PersistenceError> {
        Ok(self.state.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_page(
        &self,
        user_id: Option<i64>,
        offset: u64,
        limit: i64,
    ) -> Result<Vec<Comment>, PersistenceError> {
        let rows = self
            .state
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|c| user_id.map_or(true, |u| c.user_id == u))
            .cloned()
            .collect();
        Ok(page(rows, offset, limit))
    }

    async fn count(&self, user_id: Option<i64>) -> Result<u64, PersistenceError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .values()
            .filter(|c| user_id.map_or(true, |u| c.user_id == u))
            .count() as u64)
    }

    async fn update(&self, comment: &Comment) -> Result<Option<Comment>, PersistenceError> {
        let mut state = self.state.lock().unwrap();
        match state.rows.get_mut(&comment.id) {
            Some(row) => {
                *row = comment.clone();
                Ok(Some(comment.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, PersistenceError> {
        Ok(self.state.lock().unwrap().rows.remove(&id).is_some())
    }
}
