// src/presentation/http/controllers/accounts.rs
use crate::application::{commands::accounts::AddAccountCommand, dto::AccountDto};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "email is required"),
        email(message = "email is invalid")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "password is required"),
        must_match(
            other = "password_confirmation",
            message = "password confirmation does not match"
        )
    )]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password_confirmation is required"))]
    pub password_confirmation: String,
}

pub async fn sign_up(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<AccountDto>)> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|errors| HttpError::from_validation(&errors))?;

    let command = AddAccountCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };

    let account = state
        .services
        .account_commands
        .add(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(account.into())))
}
