//! Key issuance.

use crate::config::ConsoleConfig;
use anyhow::Result;
use identity::normalize_email;

/// Print the key `email` logs in with. The user needs no record for the
/// key to be derived, only to log in.
pub fn issue(config: &ConsoleConfig, email: &str) -> Result<()> {
    let master_key = config.master_key()?;
    let key = auth::issue_key(email, &master_key);
    println!("Email: {}", normalize_email(email));
    println!("Key:   {key}");
    Ok(())
}
