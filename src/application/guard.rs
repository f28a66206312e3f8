// src/application/guard.rs
//! Turns raw `Authorization` header values into an authenticated subject and
//! answers ownership questions for mutating operations.

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult, CredentialError},
    ports::security::TokenManager,
};
use crate::domain::user::UserId;
use std::sync::Arc;

pub const BEARER_PREFIX: &str = "Bearer ";
pub const API_KEY_PREFIX: &str = "ApiKey ";

/// Pull the token out of an `Authorization` header value.
///
/// Only an absent or empty header is an error. A value without the `Bearer `
/// prefix is handed back untouched and left for token validation to reject.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, CredentialError> {
    match header {
        None | Some("") => Err(CredentialError::Missing),
        Some(value) => Ok(value.strip_prefix(BEARER_PREFIX).unwrap_or(value)),
    }
}

/// Pull a webhook API key out of an `Authorization: ApiKey <key>` header value.
pub fn extract_api_key(header: Option<&str>) -> Result<&str, CredentialError> {
    match header {
        None | Some("") => Err(CredentialError::Missing),
        Some(value) => value
            .strip_prefix(API_KEY_PREFIX)
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(CredentialError::Malformed),
    }
}

pub fn authorize_owner(subject: UserId, resource_owner: UserId) -> ApplicationResult<()> {
    if subject == resource_owner {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "resource does not belong to the caller",
        ))
    }
}

#[derive(Clone)]
pub struct AuthorizationGuard {
    token_manager: Arc<dyn TokenManager>,
}

impl AuthorizationGuard {
    pub fn new(token_manager: Arc<dyn TokenManager>) -> Self {
        Self { token_manager }
    }

    pub async fn authenticate(&self, header: Option<&str>) -> ApplicationResult<AuthenticatedUser> {
        let token = extract_bearer(header)?;
        self.token_manager.authenticate(token).await
    }

    pub fn authorize_owner(&self, subject: UserId, resource_owner: UserId) -> ApplicationResult<()> {
        authorize_owner(subject, resource_owner)
    }
}
