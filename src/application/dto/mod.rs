// src/application/dto/mod.rs
pub mod auth;
pub mod posts;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, RefreshTokenDto};
pub use posts::PostDto;
pub use users::UserDto;
