// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Turn a plaintext password into the value stored alongside the account.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
}
