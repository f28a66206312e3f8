// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, RefreshTokenDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub user: UserDto,
    pub token: AuthTokenDto,
    pub refresh_token: RefreshTokenDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let user = self
            .find_and_authenticate_user(&command.email, &command.password)
            .await?;

        let token = self.token_manager.issue(user.id).await?;
        let refresh_token = self.sessions.issue_for_user(user.id).await?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(LoginResult {
            user: user.into(),
            token,
            refresh_token,
        })
    }

    async fn find_and_authenticate_user(&self, email: &str, password: &str) -> ApplicationResult<User> {
        // A malformed email cannot belong to anyone; answer like any unknown account.
        let email = Email::new(email).map_err(|_| ApplicationError::Authentication)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(ApplicationError::Authentication)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
