// src/domain/session/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::session::entity::{NewRefreshToken, RefreshToken};
use chrono::{DateTime, Utc};
use async_trait::async_trait;

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    async fn insert(&self, token: NewRefreshToken) -> DomainResult<RefreshToken>;

    async fn find_by_token(&self, token: &str) -> DomainResult<Option<RefreshToken>>;

    /// Stamp `revoked_at` if it is still unset.
    ///
    /// Returns `true` only for the call that performed the transition, so two
    /// racing revocations cannot both succeed.
    async fn revoke(&self, token: &str, revoked_at: DateTime<Utc>) -> DomainResult<bool>;
}
