// src/infrastructure/security/refresh_token.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::util::RefreshTokenGenerator,
};

pub const REFRESH_TOKEN_BYTES: usize = 32;

/// 32 bytes from the operating system RNG, hex-encoded to 64 characters.
#[derive(Default, Clone)]
pub struct OsRefreshTokenGenerator;

impl RefreshTokenGenerator for OsRefreshTokenGenerator {
    fn generate(&self) -> ApplicationResult<String> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        getrandom::getrandom(&mut bytes)
            .map_err(|err| ApplicationError::infrastructure(format!("getrandom: {err}")))?;
        Ok(hex::encode(bytes))
    }
}
