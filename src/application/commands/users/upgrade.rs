// src/application/commands/users/upgrade.rs
use super::UserCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{UserId, UserUpdate},
};

pub const UPGRADE_EVENT: &str = "user.upgraded";

pub struct UpgradeUserCommand {
    pub event: String,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeOutcome {
    Upgraded,
    Ignored,
}

impl UserCommandService {
    /// Handle a payment-provider webhook. Events other than [`UPGRADE_EVENT`]
    /// are acknowledged without touching the store.
    pub async fn upgrade_to_chirpy_red(
        &self,
        command: UpgradeUserCommand,
    ) -> ApplicationResult<UpgradeOutcome> {
        if command.event != UPGRADE_EVENT {
            return Ok(UpgradeOutcome::Ignored);
        }

        let raw_id = command
            .user_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ApplicationError::validation("missing user_id"))?;
        let user_id: UserId = raw_id.parse()?;

        let update = UserUpdate::new(user_id, self.clock.now()).with_chirpy_red(true);
        self.user_repo.update(update).await?;

        tracing::info!(user_id = %user_id, "user upgraded to chirpy red");
        Ok(UpgradeOutcome::Upgraded)
    }
}
