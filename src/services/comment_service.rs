//! Comment service; comments live in the relational store.

use chrono::Utc;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::constants::{CODE_COMMENT_NOT_FOUND, ERR_COMMENT_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{
    Comment, CommentResponse, CreateCommentRequest, NewComment, Pagination,
    UpdateCommentRequest,
};
use crate::repositories::CommentRepository;

pub struct CommentService {
    repository: Arc<dyn CommentRepository>,
}

fn comment_not_found(id: i64) -> ApiError {
    warn!("Comment not found with id: {}", id);
    ApiError::not_found(CODE_COMMENT_NOT_FOUND, ERR_COMMENT_NOT_FOUND)
}

impl CommentService {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_comment(&self, req: CreateCommentRequest) -> Result<Comment, ApiError> {
        let new_comment = NewComment::try_from(req)?;
        info!("Creating comment for user: {}", new_comment.user_id);

        let comment = self.repository.insert(&new_comment).await?;
        info!("Successfully created comment: {}", comment.id);
        Ok(comment)
    }

    pub async fn list_comments(
        &self,
        user_id: Option<i64>,
        pagination: Pagination,
    ) -> Result<(Vec<CommentResponse>, u64), ApiError> {
        debug!("Listing comments, user filter: {:?}", user_id);
        let total = self.repository.count(user_id).await?;
        let comments = self
            .repository
            .find_page(user_id, pagination.skip(), pagination.limit())
            .await?;

        Ok((comments.into_iter().map(Into::into).collect(), total))
    }

    pub async fn get_comment(&self, id: i64) -> Result<Option<Comment>, ApiError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn update_comment(
        &self,
        id: i64,
        req: UpdateCommentRequest,
    ) -> Result<Comment, ApiError> {
        info!("Updating comment with id: {}", id);

        let mut comment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| comment_not_found(id))?;

        if let Some(user_id) = req.user_id {
            comment.user_id = user_id;
        }

        if let Some(text) = req.text {
            comment.text = text;
        }

        comment.updated_at = Utc::now();

        self.repository
            .update(&comment)
            .await?
            .ok_or_else(|| comment_not_found(id))
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        info!("Deleting comment with id: {}", id);
        if !self.repository.delete(id).await? {
            return Err(comment_not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryCommentRepository;

    fn service() -> CommentService {
        CommentService::new(Arc::new(InMemoryCommentRepository::default()))
    }

    fn create(user_id: i64, text: &str) -> CreateCommentRequest {
        CreateCommentRequest {
            user_id: Some(user_id),
            text: Some(text.to_string()),
        }
    }

    #[actix_web::test]
    async fn test_create_and_get() {
        let service = service();
        let comment = service.create_comment(create(1, "first")).await.unwrap();
        assert_eq!(comment.id, 1);
        assert_eq!(
            service.get_comment(comment.id).await.unwrap(),
            Some(comment)
        );
    }

    // Handlers reject these in `ValidatedJson`; the service keeps its own guard.
    #[actix_web::test]
    async fn test_service_guards_missing_fields_without_the_pipe() {
        let err = service()
            .create_comment(CreateCommentRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "user_id is required");
    }

    #[actix_web::test]
    async fn test_list_filters_by_user() {
        let service = service();
        service.create_comment(create(1, "a")).await.unwrap();
        service.create_comment(create(2, "b")).await.unwrap();
        service.create_comment(create(1, "c")).await.unwrap();

        let (comments, total) = service
            .list_comments(Some(1), Pagination::default())
            .await
            .unwrap();
        assert_eq!(total, 2);
        let texts: Vec<_> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[actix_web::test]
    async fn test_update_merges() {
        let service = service();
        let created = service.create_comment(create(1, "draft")).await.unwrap();

        let updated = service
            .update_comment(
                created.id,
                UpdateCommentRequest {
                    text: Some("final".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.text, "final");
        assert_eq!(updated.user_id, 1);
        assert_eq!(updated.created_at, created.created_at);

        let err = service
            .update_comment(99, UpdateCommentRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_COMMENT_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete() {
        let service = service();
        let created = service.create_comment(create(1, "bye")).await.unwrap();
        service.delete_comment(created.id).await.unwrap();
        assert!(service.delete_comment(created.id).await.is_err());
    }
}
