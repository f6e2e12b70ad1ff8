//! User management commands: list, add, remove.

use crate::config::ConsoleConfig;
use anyhow::{Context, Result};
use auth::{DirectoryError, UserDirectory};
use clap::Subcommand;
use identity::{CredentialRecord, CredentialTable, Role};

/// User management subcommands.
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List users.
    List,
    /// Create or replace a user.
    Add {
        /// User email.
        email: String,
        /// Role tier.
        #[arg(long, default_value = "viewer")]
        role: Role,
        /// Display name.
        #[arg(long)]
        name: Option<String>,
        /// Extra permission, repeatable.
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// Remove a user.
    Remove {
        /// User email.
        email: String,
    },
}

impl UserCommand {
    /// Dispatch user management subcommands.
    pub fn run(&self, config: &ConsoleConfig) -> Result<()> {
        let directory = UserDirectory::new(config.credential_store());
        match self {
            Self::List => list(&directory),
            Self::Add {
                email,
                role,
                name,
                permissions,
            } => {
                let mut record = CredentialRecord::new(*role);
                if let Some(name) = name {
                    record = record.with_name(name.as_str());
                }
                for permission in permissions {
                    record = record.with_permission(permission.as_str());
                }
                let previous = directory
                    .upsert(email, record)
                    .with_context(|| format!("saving user {email}"))?;
                let verb = if previous.is_some() { "Updated" } else { "Created" };
                println!("{verb} {}", identity::normalize_email(email));
                Ok(())
            }
            Self::Remove { email } => {
                match directory
                    .revoke(email)
                    .with_context(|| format!("removing user {email}"))?
                {
                    Some(_) => println!("Removed {}", identity::normalize_email(email)),
                    None => println!("No user {}", identity::normalize_email(email)),
                }
                Ok(())
            }
        }
    }
}

fn list<S: store::CredentialStore>(directory: &UserDirectory<S>) -> Result<()> {
    let table = match directory.list() {
        Err(DirectoryError::Store(e)) if e.is_not_found() => CredentialTable::new(),
        other => other.context("loading users")?,
    };
    if table.is_empty() {
        println!("No users.");
        return Ok(());
    }
    for (email, record) in &table {
        let role = record.role.map_or("none", Role::as_str);
        match &record.name {
            Some(name) => println!("  {email}  {role}  {name}"),
            None => println!("  {email}  {role}"),
        }
    }
    Ok(())
}
