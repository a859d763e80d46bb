use anyhow::Context as _;

use crate::domain::repository::PasswordHasher;
use crate::error::ApiError;

/// bcrypt with the library's default cost, run on the blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, ApiError> {
        let plaintext = plaintext.to_owned();
        let hash = tokio::task::spawn_blocking(move || pwhash::bcrypt::hash(plaintext))
            .await
            .context("join password hashing task")?
            .context("hash password")?;
        Ok(hash)
    }
}
