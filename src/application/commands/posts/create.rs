// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{NewPost, PostBody},
};

pub struct CreatePostCommand {
    pub body: String,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let cleaned = self.sanitizer.sanitize(&command.body)?;
        let body = PostBody::new(cleaned)?;

        let created = self
            .write_repo
            .insert(NewPost {
                body,
                author_id: actor.id,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(post_id = %created.id, user_id = %actor.id, "post created");
        Ok(created.into())
    }
}
