// src/infrastructure/repositories/postgres_account.rs
use super::map_sqlx;
use crate::domain::account::{Account, AccountRepository, NewAccount};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: String,
    name: String,
    email: String,
    password: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
        }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn add(&self, new_account: NewAccount) -> DomainResult<Account> {
        let NewAccount {
            name,
            email,
            password,
        } = new_account;

        let row = sqlx::query_as::<_, AccountRow>(
            "INSERT INTO accounts (id, name, email, password)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, password",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(name)
        .bind(email)
        .bind(password)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }
}
