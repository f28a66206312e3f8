// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, CredentialError},
        guard::extract_bearer,
    },
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::error::{HttpError, IntoHttpResult};

/// Raw `Authorization` header value; `None` when the header is absent.
pub fn authorization_header(parts: &Parts) -> Result<Option<&str>, HttpError> {
    parts
        .headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str())
        .transpose()
        .map_err(|_| HttpError::from_error(CredentialError::Malformed.into()))
}

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(app_state)
}

/// Caller identity taken from a valid access token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let header = authorization_header(parts)?;

        app_state
            .services
            .guard()
            .authenticate(header)
            .await
            .map(Self)
            .into_http()
    }
}

/// Opaque bearer credential, used where the bearer is a refresh token.
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = authorization_header(parts)?;
        let token = extract_bearer(header).map_err(|err| HttpError::from_error(err.into()))?;
        Ok(Self(token.to_owned()))
    }
}
