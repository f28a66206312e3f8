// src/application/commands/mod.rs
pub mod posts;
pub mod sessions;
pub mod users;
