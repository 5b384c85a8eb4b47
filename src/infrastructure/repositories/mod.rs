// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory_account;
mod postgres_account;

pub use error::map_sqlx;
pub use in_memory_account::InMemoryAccountRepository;
pub use postgres_account::PostgresAccountRepository;
