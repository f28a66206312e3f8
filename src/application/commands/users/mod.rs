// src/application/commands/users/mod.rs
mod login;
mod password;
mod register;
mod reset;
mod service;
mod update;
mod upgrade;

pub use login::{LoginResult, LoginUserCommand};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
pub use upgrade::{UPGRADE_EVENT, UpgradeOutcome, UpgradeUserCommand};
