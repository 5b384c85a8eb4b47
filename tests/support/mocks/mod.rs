// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod account_repo;
pub mod fixtures;

pub use account_repo::{FailingAccountRepo, StubAccountRepo};
pub use fixtures::{VALID_ACCOUNT, valid_command};
pub use security::{FailingPasswordHasher, PrefixPasswordHasher, StubPasswordHasher};
