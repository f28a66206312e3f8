// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{Email, NewUser, PasswordHash},
};

pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        // Duplicate emails surface as a conflict from the store's unique constraint.
        let user = self
            .user_repo
            .insert(NewUser::new(email, password_hash, self.clock.now()))
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(user.into())
    }
}
