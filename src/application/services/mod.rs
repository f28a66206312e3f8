// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        commands::{
            posts::PostCommandService, sessions::SessionCommandService, users::UserCommandService,
        },
        guard::AuthorizationGuard,
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::RefreshTokenGenerator,
        },
        queries::posts::PostQueryService,
    },
    domain::{
        post::{ContentSanitizer, PostReadRepository, PostWriteRepository},
        session::RefreshTokenRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub session_commands: Arc<SessionCommandService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    guard: AuthorizationGuard,
    token_manager: Arc<dyn TokenManager>,
}

/// Ports and adapters needed to assemble [`ApplicationServices`].
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub post_write_repo: Arc<dyn PostWriteRepository>,
    pub post_read_repo: Arc<dyn PostReadRepository>,
    pub refresh_repo: Arc<dyn RefreshTokenRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub refresh_generator: Arc<dyn RefreshTokenGenerator>,
    pub clock: Arc<dyn Clock>,
    pub sanitizer: Arc<ContentSanitizer>,
    pub refresh_ttl: Duration,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            user_repo,
            post_write_repo,
            post_read_repo,
            refresh_repo,
            password_hasher,
            token_manager,
            refresh_generator,
            clock,
            sanitizer,
            refresh_ttl,
        } = deps;

        let session_commands = Arc::new(
            SessionCommandService::new(
                refresh_repo,
                Arc::clone(&user_repo),
                Arc::clone(&token_manager),
                refresh_generator,
                Arc::clone(&clock),
            )
            .with_refresh_ttl(refresh_ttl),
        );

        let user_commands = Arc::new(UserCommandService::new(
            user_repo,
            password_hasher,
            Arc::clone(&token_manager),
            Arc::clone(&session_commands),
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            post_write_repo,
            Arc::clone(&post_read_repo),
            sanitizer,
            clock,
        ));
        let post_queries = Arc::new(PostQueryService::new(post_read_repo));

        Self {
            user_commands,
            session_commands,
            post_commands,
            post_queries,
            guard: AuthorizationGuard::new(Arc::clone(&token_manager)),
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn guard(&self) -> &AuthorizationGuard {
        &self.guard
    }
}
