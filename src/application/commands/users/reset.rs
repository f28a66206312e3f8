// src/application/commands/users/reset.rs
use super::UserCommandService;
use crate::application::error::ApplicationResult;

impl UserCommandService {
    pub async fn delete_all_users(&self) -> ApplicationResult<u64> {
        let removed = self.user_repo.delete_all().await?;
        tracing::warn!(removed, "all users deleted");
        Ok(removed)
    }
}
