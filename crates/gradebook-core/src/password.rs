//! Password hashing and verification.
//!
//! Hashes are bcrypt with a fixed cost factor and a fresh salt per call.
//! Verification is constant-time inside `bcrypt`. The async variants move the
//! CPU-bound work onto tokio's blocking pool.

use std::sync::LazyLock;

use bcrypt::{hash, verify};
use thiserror::Error;

/// bcrypt cost factor used for every stored hash.
pub const PASSWORD_HASH_COST: u32 = 10;

/// Same cost as stored hashes, so checking against it takes as long as a
/// real verification.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash("gradebook-no-such-account", PASSWORD_HASH_COST).ok());

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(#[source] bcrypt::BcryptError),

    #[error("stored password hash is malformed")]
    MalformedHash,

    #[error("password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash(password, PASSWORD_HASH_COST).map_err(PasswordError::Hash)
}

/// Returns `Ok(false)` on mismatch and `Err(MalformedHash)` only when `hashed`
/// is not a bcrypt string.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, PasswordError> {
    verify(password, hashed).map_err(|_| PasswordError::MalformedHash)
}

/// Runs a full bcrypt verification against a fixed hash and always answers
/// `false`. Used when no account matched, so that path costs the same time as
/// a wrong password.
pub fn verify_dummy_password(password: &str) -> Result<bool, PasswordError> {
    if let Some(hashed) = DUMMY_HASH.as_deref() {
        verify(password, hashed).map_err(|_| PasswordError::MalformedHash)?;
    }
    Ok(false)
}

pub async fn hash_password_async(password: String) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

pub async fn verify_password_async(
    password: String,
    hashed: String,
) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hashed)).await?
}

pub async fn verify_dummy_password_async(password: String) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_dummy_password(&password)).await?
}
