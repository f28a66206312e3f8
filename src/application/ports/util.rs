// src/application/ports/util.rs
use crate::application::ApplicationResult;

pub trait RefreshTokenGenerator: Send + Sync {
    /// Fresh opaque refresh credential. Uniqueness is left to the store.
    fn generate(&self) -> ApplicationResult<String>;
}
