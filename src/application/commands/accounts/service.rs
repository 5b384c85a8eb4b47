use std::sync::Arc;

use crate::application::ports::security::PasswordHasher;
use crate::domain::account::AccountRepository;

/// Write-side account use cases. Holds only shared handles to its ports, so a
/// single instance can serve any number of concurrent requests.
pub struct AccountCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
}

impl AccountCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
        }
    }
}
