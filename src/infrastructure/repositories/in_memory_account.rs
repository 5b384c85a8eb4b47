// src/infrastructure/repositories/in_memory_account.rs
use crate::domain::account::{Account, AccountRepository, NewAccount};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local account store keyed by id. Emails are unique, compared
/// case-insensitively.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts
            .read()
            .await
            .values()
            .find(|account| account.email.eq_ignore_ascii_case(email))
            .cloned()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn add(&self, new_account: NewAccount) -> DomainResult<Account> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&new_account.email))
        {
            return Err(DomainError::conflict("email already in use"));
        }

        let account = new_account.into_account(Uuid::new_v4().to_string());
        accounts.insert(account.id.clone(), account.clone());

        Ok(account)
    }
}
