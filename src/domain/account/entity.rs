// src/domain/account/entity.rs

/// A stored account. The `id` is assigned by the repository that persisted it
/// and `password` always holds a hash, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Persistence request handed to an [`AccountRepository`](super::AccountRepository).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewAccount {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password_hash.into(),
        }
    }

    pub fn into_account(self, id: impl Into<String>) -> Account {
        Account {
            id: id.into(),
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}
