// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_post;
mod postgres_refresh_token;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
pub use postgres_refresh_token::PostgresRefreshTokenRepository;
pub use postgres_user::PostgresUserRepository;
