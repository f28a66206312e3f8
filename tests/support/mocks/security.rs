// tests/support/mocks/security.rs
use async_trait::async_trait;
use chirpy::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{security::PasswordHasher, util::RefreshTokenGenerator},
};
use std::sync::atomic::{AtomicU64, Ordering};

/// Reversible stand-in for Argon2 so HTTP tests stay fast.
pub struct PlainPasswordHasher;

const PREFIX: &str = "plain$";

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        match expected_hash.strip_prefix(PREFIX) {
            Some(stored) if stored == password => Ok(()),
            _ => Err(ApplicationError::Authentication),
        }
    }
}

/// Predictable 64-character hex refresh tokens.
#[derive(Default)]
pub struct SequentialRefreshTokens {
    next: AtomicU64,
}

impl RefreshTokenGenerator for SequentialRefreshTokens {
    fn generate(&self) -> ApplicationResult<String> {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("{n:064x}"))
    }
}
