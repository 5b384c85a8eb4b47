// tests/support/mocks/account_repo.rs
use account_core::domain::account::{Account, AccountRepository, NewAccount};
use account_core::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::sync::Mutex;

/// Returns a canned account and records every persistence request.
#[derive(Debug)]
pub struct StubAccountRepo {
    stored: Account,
    calls: Mutex<Vec<NewAccount>>,
}

impl StubAccountRepo {
    pub fn new(stored: Account) -> Self {
        Self {
            stored,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<NewAccount> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountRepository for StubAccountRepo {
    async fn add(&self, new_account: NewAccount) -> DomainResult<Account> {
        self.calls.lock().unwrap().push(new_account);
        Ok(self.stored.clone())
    }
}

/// Records the request, then fails with the configured error.
#[derive(Debug)]
pub struct FailingAccountRepo {
    error: DomainError,
    calls: Mutex<Vec<NewAccount>>,
}

impl FailingAccountRepo {
    pub fn new(error: DomainError) -> Self {
        Self {
            error,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountRepository for FailingAccountRepo {
    async fn add(&self, new_account: NewAccount) -> DomainResult<Account> {
        self.calls.lock().unwrap().push(new_account);
        Err(self.error.clone())
    }
}
