// src/infrastructure/security/mod.rs
pub mod password;
pub mod refresh_token;
pub mod token;
