//! Comment repository backed by PostgreSQL through sqlx.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::CommentRepository;
use crate::constants::TABLE_COMMENTS;
use crate::errors::PersistenceError;
use crate::models::{Comment, NewComment};

const COMMENT_COLUMNS: &str = "id, user_id, text, created_at, updated_at";

pub struct SqlxCommentRepository {
    pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, PersistenceError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply the embedded migrations under `./migrations`.
    pub async fn migrate(&self) -> Result<(), PersistenceError> {
        info!("Running relational migrations...");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| PersistenceError::Backend(e.to_string()))?;
        info!("Relational migrations applied");
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, PersistenceError> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO {} (user_id, text, created_at, updated_at) \
             VALUES ($1, $2, $3, $3) RETURNING {}",
            TABLE_COMMENTS, COMMENT_COLUMNS
        );
        let row = sqlx::query_as::<_, Comment>(&sql)
            .bind(comment.user_id)
            .bind(&comment.text)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, PersistenceError> {
        debug!("Repository: Finding comment by ID: {}", id);
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            COMMENT_COLUMNS, TABLE_COMMENTS
        );
        Ok(sqlx::query_as::<_, Comment>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_page(
        &self,
        user_id: Option<i64>,
        offset: u64,
        limit: i64,
    ) -> Result<Vec<Comment>, PersistenceError> {
        let sql = format!(
            "SELECT {} FROM {} \
             WHERE ($1::BIGINT IS NULL OR user_id = $1) \
             ORDER BY id ASC LIMIT $2 OFFSET $3",
            COMMENT_COLUMNS, TABLE_COMMENTS
        );
        Ok(sqlx::query_as::<_, Comment>(&sql)
            .bind(user_id)
            .bind(limit)
            .bind(i64::try_from(offset).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?)
    }

    async fn count(&self, user_id: Option<i64>) -> Result<u64, PersistenceError> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE ($1::BIGINT IS NULL OR user_id = $1)",
            TABLE_COMMENTS
        );
        let total: i64 = sqlx::query_scalar(&sql)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(total.max(0) as u64)
    }

    async fn update(&self, comment: &Comment) -> Result<Option<Comment>, PersistenceError> {
        let sql = format!(
            "UPDATE {} SET user_id = $2, text = $3, updated_at = $4 \
             WHERE id = $1 RETURNING {}",
            TABLE_COMMENTS, COMMENT_COLUMNS
        );
        Ok(sqlx::query_as::<_, Comment>(&sql)
            .bind(comment.id)
            .bind(comment.user_id)
            .bind(&comment.text)
            .bind(comment.updated_at)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, PersistenceError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", TABLE_COMMENTS);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
