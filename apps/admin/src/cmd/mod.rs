//! CLI argument parsing and subcommand dispatch.

use crate::config::{self, ConsoleConfig};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use session::VisitCommand;
pub use user::UserCommand;

pub mod key;
pub mod session;
pub mod user;

/// ChatTGP admin console.
#[derive(Parser, Debug)]
#[command(name = "chattgp-admin", about = "ChatTGP admin console")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to `<config dir>/chattgp/console.toml`).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the API key for a user.
    IssueKey {
        /// User email.
        email: String,
    },
    /// Log in and show the session.
    Login {
        /// User email.
        email: String,
        /// API key.
        #[arg(long)]
        key: String,
    },
    /// Render a console page, optionally logging in first.
    Visit(VisitCommand),
    /// Manage users.
    User {
        /// User subcommand.
        #[command(subcommand)]
        action: UserCommand,
    },
}

impl Cli {
    /// Load the config and run the subcommand.
    pub fn run(self) -> Result<()> {
        let path = match self.config {
            Some(path) => path,
            None => config::default_config_path()?,
        };
        let config = ConsoleConfig::load(&path)?;

        match self.command {
            Command::IssueKey { email } => key::issue(&config, &email),
            Command::Login { email, key } => session::login(&config, &email, &key),
            Command::Visit(visit) => visit.run(&config),
            Command::User { action } => action.run(&config),
        }
    }
}
