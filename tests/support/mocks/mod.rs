// tests/support/mocks/mod.rs
pub mod security;
pub mod store;
pub mod time;

pub use security::{PlainPasswordHasher, SequentialRefreshTokens};
pub use store::{InMemoryStore, LosingRevokeStore};
pub use time::{TestClock, fixed_now};
