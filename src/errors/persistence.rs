//! Storage-facing errors returned by every repository implementation.

use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// MongoDB server code for a unique index violation.
pub const MONGO_DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A unique index or constraint rejected the write.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("{0}")]
    Backend(String),
}

impl From<mongodb::error::Error> for PersistenceError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_mongo_duplicate_key(&err) {
            PersistenceError::DuplicateKey(err.to_string())
        } else {
            PersistenceError::Backend(err.to_string())
        }
    }
}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                PersistenceError::DuplicateKey(db_err.message().to_string())
            }
            _ => PersistenceError::Backend(err.to_string()),
        }
    }
}

fn is_mongo_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            is_duplicate_code(write_error.code)
        }
        ErrorKind::Command(command_error) => is_duplicate_code(command_error.code),
        _ => false,
    }
}

fn is_duplicate_code(code: i32) -> bool {
    code == MONGO_DUPLICATE_KEY_CODE
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind as SqlErrorKind};
    use std::error::Error as StdError;

    #[derive(Debug, Error)]
    #[error("{message}")]
    struct FakeDatabaseError {
        message: String,
        kind: SqlErrorKind,
    }

    impl DatabaseError for FakeDatabaseError {
        fn message(&self) -> &str {
            &self.message
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> SqlErrorKind {
            match self.kind {
                SqlErrorKind::UniqueViolation => SqlErrorKind::UniqueViolation,
                _ => SqlErrorKind::Other,
            }
        }
    }

    fn database_error(message: &str, kind: SqlErrorKind) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDatabaseError {
            message: message.to_string(),
            kind,
        }))
    }

    #[test]
    fn test_duplicate_code() {
        assert!(is_duplicate_code(11000));
        assert!(!is_duplicate_code(11001));
        assert!(!is_duplicate_code(0));
    }

    #[test]
    fn test_unique_violation_is_duplicate_key() {
        let err: PersistenceError = database_error(
            "duplicate key value violates unique constraint \"comments_pkey\"",
            SqlErrorKind::UniqueViolation,
        )
        .into();
        assert_eq!(
            err,
            PersistenceError::DuplicateKey(
                "duplicate key value violates unique constraint \"comments_pkey\"".to_string()
            )
        );
    }

    #[test]
    fn test_other_sqlx_errors_are_backend() {
        let err: PersistenceError =
            database_error("null value in column \"text\"", SqlErrorKind::NotNullViolation)
                .into();
        assert!(matches!(err, PersistenceError::Backend(_)));

        let err: PersistenceError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, PersistenceError::Backend(_)));
    }
}
