// src/presentation/http/controllers/auth.rs
use crate::application::{commands::users::LoginUserCommand, dto::UserDto};
use crate::presentation::http::controllers::users::CredentialsRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::BearerToken;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Serialize;

#[derive(Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserDto,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CredentialsRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        user: result.user,
        token: result.token.token,
        refresh_token: result.refresh_token.token,
    }))
}

pub async fn refresh(
    Extension(state): Extension<HttpState>,
    BearerToken(refresh_token): BearerToken,
) -> HttpResult<Json<RefreshResponse>> {
    let access = state
        .services
        .session_commands
        .redeem(&refresh_token)
        .await
        .into_http()?;

    Ok(Json(RefreshResponse {
        token: access.token,
    }))
}

pub async fn revoke(
    Extension(state): Extension<HttpState>,
    BearerToken(refresh_token): BearerToken,
) -> HttpResult<StatusCode> {
    state
        .services
        .session_commands
        .revoke(&refresh_token)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
