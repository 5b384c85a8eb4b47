use super::AccountCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::account::{Account, NewAccount},
};
use tracing::Instrument;

/// Input of the add-account use case. `password` is plaintext here and only
/// here; it is replaced by its hash before anything is persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct AddAccountCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AddAccountCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddAccountCommand")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AccountCommandService {
    /// Hash the password, persist the account and hand back whatever the
    /// repository stored. Errors from either port are returned as-is; the
    /// repository is never reached when hashing fails.
    pub async fn add(&self, command: AddAccountCommand) -> ApplicationResult<Account> {
        let span = tracing::info_span!("add_account", email = %command.email);

        async move {
            let hashed = self.password_hasher.hash(&command.password).await?;

            let new_account = NewAccount::new(command.name, command.email, hashed);
            let account = self.account_repo.add(new_account).await?;

            tracing::debug!(account_id = %account.id, "account stored");
            Ok(account)
        }
        .instrument(span)
        .await
    }
}
