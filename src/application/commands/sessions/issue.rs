// src/application/commands/sessions/issue.rs
use super::SessionCommandService;
use crate::{
    application::{
        dto::RefreshTokenDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        session::{NewRefreshToken, RefreshTokenValue},
        user::UserId,
    },
};

impl SessionCommandService {
    pub async fn issue_for_user(&self, user_id: UserId) -> ApplicationResult<RefreshTokenDto> {
        let token = RefreshTokenValue::new(self.generator.generate()?);
        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(self.refresh_ttl)
            .ok_or_else(|| ApplicationError::infrastructure("refresh token expiration overflow"))?;

        let stored = self
            .refresh_repo
            .insert(NewRefreshToken {
                token,
                user_id,
                expires_at,
                created_at: now,
            })
            .await?;

        tracing::info!(user_id = %user_id, expires_at = %stored.expires_at, "refresh token issued");

        Ok(RefreshTokenDto {
            token: stored.token.into(),
            expires_at: stored.expires_at,
        })
    }
}
