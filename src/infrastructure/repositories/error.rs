use crate::domain::errors::DomainError;

const CNT_ACCOUNT_EMAIL: &str = "accounts_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ACCOUNT_EMAIL => DomainError::conflict("email already in use"),
                    other => {
                        DomainError::persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if db_err.code().as_deref() == Some("23505") {
                return DomainError::conflict("unique constraint violated");
            }

            DomainError::persistence(db_err.message())
        }
        _ => DomainError::persistence(err.to_string()),
    }
}
