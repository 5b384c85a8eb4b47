// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::accounts::AccountCommandService, ports::security::PasswordHasher},
    domain::account::AccountRepository,
};

pub struct ApplicationServices {
    pub account_commands: Arc<AccountCommandService>,
}

impl ApplicationServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let account_commands = Arc::new(AccountCommandService::new(account_repo, password_hasher));

        Self { account_commands }
    }
}
