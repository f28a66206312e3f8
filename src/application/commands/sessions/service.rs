// src/application/commands/sessions/service.rs
use std::sync::Arc;

use chrono::Duration;

use crate::application::ports::{
    security::TokenManager, time::Clock, util::RefreshTokenGenerator,
};
use crate::domain::{session::RefreshTokenRepository, user::UserRepository};

pub const DEFAULT_REFRESH_TTL_DAYS: i64 = 60;

pub struct SessionCommandService {
    pub(super) refresh_repo: Arc<dyn RefreshTokenRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) generator: Arc<dyn RefreshTokenGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) refresh_ttl: Duration,
}

impl SessionCommandService {
    pub fn new(
        refresh_repo: Arc<dyn RefreshTokenRepository>,
        user_repo: Arc<dyn UserRepository>,
        token_manager: Arc<dyn TokenManager>,
        generator: Arc<dyn RefreshTokenGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            refresh_repo,
            user_repo,
            token_manager,
            generator,
            clock,
            refresh_ttl: Duration::days(DEFAULT_REFRESH_TTL_DAYS),
        }
    }

    pub fn with_refresh_ttl(mut self, refresh_ttl: Duration) -> Self {
        self.refresh_ttl = refresh_ttl;
        self
    }
}
