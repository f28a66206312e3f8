// src/domain/session/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewRefreshToken, RefreshToken};
pub use repository::RefreshTokenRepository;
pub use value_objects::RefreshTokenValue;
