//! User service for user creation, listing, partial updates and deletion.

use mongodb::bson::DateTime;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{
    CODE_EMAIL_EXISTS, CODE_PERSISTENCE_FAILED, CODE_USER_NOT_FOUND, ERR_EMAIL_REGISTERED,
    ERR_USER_NOT_FOUND,
};
use crate::errors::{ApiError, PersistenceError};
use crate::models::requests::non_empty;
use crate::models::{
    CreateUserRequest, NewUser, Pagination, UpdateUserRequest, User, UserResponse,
};
use crate::repositories::UserRepository;
use crate::services::password::{hash_password, verify_password};
use crate::utils::log_sanitizer::{mask_email, mask_phone};
use crate::validators::to_international_format;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
}

/// Writes to the users collection surface as client errors: a duplicate
/// email gets a readable message, anything else keeps the driver message.
fn user_write_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DuplicateKey(_) => {
            ApiError::bad_request(CODE_EMAIL_EXISTS, ERR_EMAIL_REGISTERED)
        }
        PersistenceError::Backend(message) => {
            ApiError::bad_request(CODE_PERSISTENCE_FAILED, message)
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            repository,
            bcrypt_cost,
        }
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, ApiError> {
        let new_user = NewUser::try_from(req)?;
        info!("Creating user with email: {}", mask_email(&new_user.email));

        let password = hash_password(&new_user.password, self.bcrypt_cost)?;
        let id = self
            .repository
            .next_id()
            .await
            .map_err(user_write_error)?;

        let now = DateTime::now();
        let user = User {
            id,
            name: new_user.name,
            password,
            email: normalize_email(&new_user.email),
            phone: to_international_format(&new_user.phone),
            viber: new_user.viber.as_deref().map(to_international_format),
            address: new_user.address,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(&user).await.map_err(|e| {
            warn!(
                "User creation failed for {}: {}",
                mask_email(&user.email),
                e
            );
            user_write_error(e)
        })?;

        info!("Successfully created user: {}", user.id);
        Ok(user)
    }

    pub async fn list_users(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<UserResponse>, u64), ApiError> {
        let total = self.repository.count().await?;
        let users = self
            .repository
            .find_page(pagination.skip(), pagination.limit())
            .await?;
        let user_responses: Vec<UserResponse> = users.into_iter().map(|u| u.into()).collect();

        Ok((user_responses, total))
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by ID: {}", id);
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Merge a partial update into the stored user and write the whole
    /// document back. There is no concurrency control: concurrent PATCHes
    /// race and the last write wins.
    pub async fn update_user(&self, id: i64, req: UpdateUserRequest) -> Result<User, ApiError> {
        info!("Updating user with id: {}", id);

        let mut user = self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Update failed: User not found with id: {}", id);
            ApiError::bad_request(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND)
        })?;

        if let Some(name) = req.name {
            user.name = name;
        }

        if let Some(password) = req.password {
            // Keep the existing hash when the password did not change.
            if !verify_password(&password, &user.password).unwrap_or(false) {
                user.password = hash_password(&password, self.bcrypt_cost)?;
            }
        }

        if let Some(email) = req.email {
            user.email = normalize_email(&email);
        }

        if let Some(phone) = req.phone {
            user.phone = to_international_format(&phone);
            debug!("User {} phone set to {}", id, mask_phone(&user.phone));
        }

        if let Some(viber) = req.viber {
            user.viber = non_empty(viber).as_deref().map(to_international_format);
        }

        if let Some(address) = req.address {
            user.address = non_empty(address);
        }

        user.updated_at = DateTime::now();

        let replaced = self
            .repository
            .replace(&user)
            .await
            .map_err(user_write_error)?;
        if !replaced {
            warn!("Update failed: User {} disappeared before write", id);
            return Err(ApiError::bad_request(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND));
        }

        info!("Successfully updated user: {}", id);
        Ok(user)
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        info!("Deleting user with id: {}", id);

        if !self.repository.delete(id).await? {
            warn!("Delete failed: User not found with id: {}", id);
            return Err(ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND));
        }

        info!("Successfully deleted user: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryUserRepository, TEST_BCRYPT_COST};

    fn service() -> (UserService, Arc<InMemoryUserRepository>) {
        let repository = Arc::new(InMemoryUserRepository::default());
        (
            UserService::new(repository.clone(), TEST_BCRYPT_COST),
            repository,
        )
    }

    fn create_request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: Some("taras".to_string()),
            password: Some("secret123".to_string()),
            email: Some(email.to_string()),
            phone: Some("+32494322456".to_string()),
            viber: Some(Some("".to_string())),
            address: Some("Khreshchatyk 1, Kyiv".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_create_user_hashes_password_and_normalizes() {
        let (service, repository) = service();

        let user = service
            .create_user(create_request("Taras@Example.com"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "taras@example.com");
        assert_eq!(user.phone, "+32 494 32 24 56");
        assert_eq!(user.viber, None);
        assert_ne!(user.password, "secret123");
        assert!(verify_password("secret123", &user.password).unwrap());
        assert_eq!(repository.find_by_id(1).await.unwrap(), Some(user));
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_translated() {
        let (service, _) = service();
        service
            .create_user(create_request("taras@example.com"))
            .await
            .unwrap();

        let err = service
            .create_user(create_request("TARAS@example.com"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::bad_request(CODE_EMAIL_EXISTS, ERR_EMAIL_REGISTERED)
        );
    }

    #[actix_web::test]
    async fn test_other_persistence_errors_keep_driver_message() {
        let (service, repository) = service();
        repository.fail_next_write(PersistenceError::Backend("connection refused".into()));

        let err = service
            .create_user(create_request("taras@example.com"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::bad_request(CODE_PERSISTENCE_FAILED, "connection refused")
        );
    }

    #[actix_web::test]
    async fn test_update_merges_and_clears() {
        let (service, _) = service();
        let mut req = create_request("taras@example.com");
        req.viber = Some(Some("+380501234567".to_string()));
        let created = service.create_user(req).await.unwrap();
        assert!(created.viber.is_some());

        let updated = service
            .update_user(
                created.id,
                UpdateUserRequest {
                    name: Some("lesya".to_string()),
                    viber: Some(None),
                    address: Some(Some("".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "lesya");
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.phone, created.phone);
        assert_eq!(updated.password, created.password);
        assert_eq!(updated.viber, None);
        assert_eq!(updated.address, None);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn test_update_rehashes_new_password() {
        let (service, _) = service();
        let created = service
            .create_user(create_request("taras@example.com"))
            .await
            .unwrap();

        let same = service
            .update_user(
                created.id,
                UpdateUserRequest {
                    password: Some("secret123".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(same.password, created.password);

        let changed = service
            .update_user(
                created.id,
                UpdateUserRequest {
                    password: Some("another42".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(verify_password("another42", &changed.password).unwrap());
    }

    #[actix_web::test]
    async fn test_update_missing_user_is_bad_request() {
        let (service, _) = service();
        let err = service
            .update_user(42, UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::bad_request(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND)
        );
    }

    #[actix_web::test]
    async fn test_update_to_taken_email() {
        let (service, _) = service();
        service
            .create_user(create_request("taras@example.com"))
            .await
            .unwrap();
        let other = service
            .create_user(create_request("lesya@example.com"))
            .await
            .unwrap();

        let err = service
            .update_user(
                other.id,
                UpdateUserRequest {
                    email: Some("taras@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), CODE_EMAIL_EXISTS);
    }

    #[actix_web::test]
    async fn test_list_and_delete() {
        let (service, _) = service();
        for email in ["a@example.com", "b@example.com", "c@example.com"] {
            service.create_user(create_request(email)).await.unwrap();
        }

        let (page, total) = service
            .list_users(Pagination::new(Some(2), Some(2)))
            .await
            .unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].email, "c@example.com");

        service.delete_user(2).await.unwrap();
        assert!(service.get_user(2).await.unwrap().is_none());
        assert_eq!(service.delete_user(2).await.unwrap_err().code(), CODE_USER_NOT_FOUND);
    }
}
