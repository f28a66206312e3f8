// src/application/commands/users/update.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::ApplicationResult,
    },
    domain::user::{Email, PasswordHash, UserUpdate},
};

pub struct UpdateUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Replace the caller's own email and password.
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let update = UserUpdate::new(actor.id, self.clock.now())
            .with_email(email)
            .with_password_hash(password_hash);

        let user = self.user_repo.update(update).await?;
        tracing::info!(user_id = %user.id, "user credentials updated");
        Ok(user.into())
    }
}
