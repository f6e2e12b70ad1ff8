//! ChatTGP admin console: configuration loading and the operator CLI
//! that drives the authentication gate.

pub use cmd::{Cli, Command};
pub use config::ConsoleConfig;

pub mod cmd;
pub mod config;
pub mod utils;
