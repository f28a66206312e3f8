// src/presentation/http/controllers/webhooks.rs
use crate::application::{
    commands::users::{UpgradeOutcome, UpgradeUserCommand},
    error::ApplicationError,
    guard::extract_api_key,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    body::Bytes,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PolkaWebhookRequest {
    pub event: String,
    #[serde(default)]
    pub data: PolkaWebhookData,
}

#[derive(Debug, Default, Deserialize)]
pub struct PolkaWebhookData {
    #[serde(default)]
    pub user_id: Option<String>,
}

fn check_api_key(headers: &HeaderMap, expected: Option<&str>) -> HttpResult<()> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let presented = extract_api_key(header).map_err(|err| HttpError::from_error(err.into()))?;

    // An unconfigured key rejects every caller.
    match expected {
        Some(expected) if expected == presented => Ok(()),
        _ => Err(HttpError::from_error(ApplicationError::Authentication)),
    }
}

pub async fn polka(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
    body: Bytes,
) -> HttpResult<StatusCode> {
    // The key is checked before the body is looked at.
    check_api_key(&headers, state.polka_key.as_deref())?;
    let payload: PolkaWebhookRequest = serde_json::from_slice(&body).map_err(|_| {
        HttpError::from_error(ApplicationError::validation("invalid webhook payload"))
    })?;

    let command = UpgradeUserCommand {
        event: payload.event,
        user_id: payload.data.user_id,
    };
    let outcome = state
        .services
        .user_commands
        .upgrade_to_chirpy_red(command)
        .await
        .into_http()?;

    if outcome == UpgradeOutcome::Ignored {
        tracing::debug!("webhook event ignored");
    }
    Ok(StatusCode::NO_CONTENT)
}
