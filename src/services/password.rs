//! Password hashing utilities.

use bcrypt::{hash, verify};

use crate::errors::ApiError;

/// Hash a password using bcrypt.
pub fn hash_password(password: &str, cost: u32) -> Result<String, ApiError> {
    Ok(hash(password, cost)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(verify(password, hash)?)
}
