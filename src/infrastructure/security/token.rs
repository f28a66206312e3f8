// src/infrastructure/security/token.rs
//! HS256 access tokens carrying only issuer, subject, issued-at and expiry.

use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult, TokenError},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::{sync::Arc, time::Duration};

pub const ISSUER: &str = "chirpy";
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    iss: String,
    sub: String,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub subject: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Signs and checks access tokens against a caller-supplied secret.
///
/// Expiry is judged against the injected clock rather than the library's
/// wall-clock check. Timestamps carry whole-second precision and `exp` is
/// rounded up, so a fresh token is never already expired.
#[derive(Clone)]
pub struct JwtCodec {
    clock: Arc<dyn Clock>,
    validation: Validation,
}

impl JwtCodec {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[ISSUER]);
        validation.set_required_spec_claims(&["iss", "sub", "exp"]);

        Self { clock, validation }
    }

    pub fn issue(&self, subject: UserId, secret: &[u8], ttl: Duration) -> ApplicationResult<IssuedToken> {
        if ttl.is_zero() {
            return Err(ApplicationError::infrastructure(
                "access token ttl must be positive",
            ));
        }
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let now = self.clock.now();
        let deadline = now
            .checked_add_signed(ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let exp = if deadline.timestamp_subsec_nanos() > 0 {
            deadline.timestamp() + 1
        } else {
            deadline.timestamp()
        };

        let claims = AccessClaims {
            iss: ISSUER.to_string(),
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(IssuedToken {
            token,
            issued_at: from_timestamp(claims.iat)
                .ok_or_else(|| ApplicationError::infrastructure("issued_at out of range"))?,
            expires_at: from_timestamp(claims.exp)
                .ok_or_else(|| ApplicationError::infrastructure("expires_at out of range"))?,
        })
    }

    /// Full check returning every verified claim.
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<VerifiedToken, TokenError> {
        let data = decode::<AccessClaims>(token, &DecodingKey::from_secret(secret), &self.validation)
            .map_err(|err| match err.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::InvalidIssuer => TokenError::WrongIssuer,
                _ => TokenError::Malformed,
            })?;
        let claims = data.claims;

        let expires_at = from_timestamp(claims.exp).ok_or(TokenError::Malformed)?;
        if self.clock.now() >= expires_at {
            return Err(TokenError::Expired);
        }

        Ok(VerifiedToken {
            subject: claims.sub.parse().map_err(|_| TokenError::Malformed)?,
            issued_at: from_timestamp(claims.iat).ok_or(TokenError::Malformed)?,
            expires_at,
        })
    }

    pub fn validate(&self, token: &str, secret: &[u8]) -> Result<UserId, TokenError> {
        self.verify(token, secret).map(|verified| verified.subject)
    }
}

fn from_timestamp(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(seconds, 0)
}

/// [`TokenManager`] bound to the process secret and the configured lifetime.
#[derive(Clone)]
pub struct JwtTokenManager {
    codec: JwtCodec,
    secret: Arc<[u8]>,
    ttl: Duration,
}

impl JwtTokenManager {
    pub fn new(secret: impl AsRef<[u8]>, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(ApplicationError::infrastructure("token secret cannot be empty"));
        }

        Ok(Self {
            codec: JwtCodec::new(clock),
            secret: Arc::from(secret),
            ttl,
        })
    }

    pub fn codec(&self) -> &JwtCodec {
        &self.codec
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: UserId) -> ApplicationResult<AuthTokenDto> {
        let issued = self.codec.issue(subject, &self.secret, self.ttl)?;
        let expires_in = issued
            .expires_at
            .signed_duration_since(issued.issued_at)
            .num_seconds()
            .max(0);

        Ok(AuthTokenDto {
            token: issued.token,
            issued_at: issued.issued_at,
            expires_at: issued.expires_at,
            expires_in,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let verified = self
            .codec
            .verify(token, &self.secret)
            .inspect_err(|err| tracing::debug!(error = %err, "access token rejected"))?;

        Ok(AuthenticatedUser {
            id: verified.subject,
            issued_at: verified.issued_at,
            expires_at: verified.expires_at,
        })
    }
}
