// tests/support/mocks/fixtures.rs
use account_core::application::commands::accounts::AddAccountCommand;
use account_core::domain::account::Account;
use once_cell::sync::Lazy;

/// What the stub repository hands back for the canonical command.
pub static VALID_ACCOUNT: Lazy<Account> = Lazy::new(|| Account {
    id: "valid_id".into(),
    name: "valid_name".into(),
    email: "valid_email".into(),
    password: "hashed_password".into(),
});

pub fn valid_command() -> AddAccountCommand {
    AddAccountCommand {
        name: "valid_name".into(),
        email: "valid_email".into(),
        password: "valid_password".into(),
    }
}
