// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{RegisterUserCommand, UpdateUserCommand},
    dto::UserDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CredentialsRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()
        .map(|user| (StatusCode::CREATED, Json(user)))
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CredentialsRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateUserCommand {
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .update_user(&actor, command)
        .await
        .into_http()
        .map(Json)
}
