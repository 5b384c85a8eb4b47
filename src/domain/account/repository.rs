use crate::domain::account::entity::{Account, NewAccount};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist `new_account` and return it with a freshly assigned id.
    async fn add(&self, new_account: NewAccount) -> DomainResult<Account>;
}
