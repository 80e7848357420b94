//! bcrypt hashing and verification.
//!
//! Both operations are CPU bound and run on tokio's blocking pool.

use crate::errors::AppResult;

pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Constant-time comparison of `password` against a stored bcrypt hash.
pub async fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();
    let matches =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;
    Ok(matches)
}
