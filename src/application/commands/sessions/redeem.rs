// src/application/commands/sessions/redeem.rs
use super::SessionCommandService;
use crate::application::{
    dto::AuthTokenDto,
    error::{ApplicationResult, SessionError},
};

impl SessionCommandService {
    /// Exchange a refresh token for a new access token.
    ///
    /// The refresh token itself is left untouched and stays usable until it
    /// expires or is revoked.
    pub async fn redeem(&self, token: &str) -> ApplicationResult<AuthTokenDto> {
        let stored = self
            .refresh_repo
            .find_by_token(token)
            .await?
            .ok_or(SessionError::NotFound)?;

        if stored.is_revoked() {
            tracing::warn!(user_id = %stored.user_id, "revoked refresh token presented");
            return Err(SessionError::Revoked.into());
        }
        if stored.is_expired_at(self.clock.now()) {
            return Err(SessionError::Expired.into());
        }

        let user = self
            .user_repo
            .find_by_id(stored.user_id)
            .await?
            .ok_or(SessionError::NotFound)?;

        self.token_manager.issue(user.id).await
    }
}
