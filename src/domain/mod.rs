// src/domain/mod.rs
pub mod errors;
pub mod post;
pub mod session;
pub mod user;
