// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        guard::authorize_owner,
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: String,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id: PostId = command.id.parse()?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        authorize_owner(actor.id, post.author_id)?;

        self.write_repo.delete(id).await?;
        tracing::info!(post_id = %id, user_id = %actor.id, "post deleted");
        Ok(())
    }
}
