// src/application/commands/sessions/mod.rs
mod issue;
mod redeem;
mod revoke;
mod service;

pub use service::{DEFAULT_REFRESH_TTL_DAYS, SessionCommandService};
