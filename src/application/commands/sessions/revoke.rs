// src/application/commands/sessions/revoke.rs
use super::SessionCommandService;
use crate::application::error::{ApplicationResult, SessionError};

impl SessionCommandService {
    /// Revoke a refresh token. The first caller wins; every later call reports
    /// `AlreadyRevoked` so the boundary can tell a no-op from a real revocation.
    pub async fn revoke(&self, token: &str) -> ApplicationResult<()> {
        let stored = self
            .refresh_repo
            .find_by_token(token)
            .await?
            .ok_or(SessionError::NotFound)?;

        if stored.is_revoked() {
            return Err(SessionError::AlreadyRevoked.into());
        }

        let revoked = self.refresh_repo.revoke(token, self.clock.now()).await?;
        if !revoked {
            return Err(SessionError::AlreadyRevoked.into());
        }

        tracing::info!(user_id = %stored.user_id, "refresh token revoked");
        Ok(())
    }
}
