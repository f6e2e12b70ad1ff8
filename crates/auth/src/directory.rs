//! User management over the credential document.

use identity::{CredentialRecord, CredentialTable, normalize_email};
use store::{CredentialStore, StoreError};

/// Failure editing the user directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The email cannot be a credential key.
    #[error("'{0}' is not a usable email address")]
    InvalidEmail(String),
    /// The credential document could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Create, update and revoke users.
///
/// Every edit loads the whole document, changes one entry and writes the
/// whole document back. Concurrent editors race; the last write wins.
pub struct UserDirectory<S> {
    store: S,
}

impl<S: CredentialStore> UserDirectory<S> {
    /// Manage users in `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All users.
    pub fn list(&self) -> Result<CredentialTable, DirectoryError> {
        Ok(self.store.load_all()?)
    }

    /// One user's record.
    pub fn get(&self, email: &str) -> Result<Option<CredentialRecord>, DirectoryError> {
        Ok(self.store.load_all()?.get(email).cloned())
    }

    /// Create or replace a user. Returns the previous record.
    ///
    /// A missing document counts as empty.
    pub fn upsert(
        &self,
        email: &str,
        record: CredentialRecord,
    ) -> Result<Option<CredentialRecord>, DirectoryError> {
        let key = normalize_email(email);
        if !key.contains('@') || key.starts_with('@') || key.ends_with('@') {
            return Err(DirectoryError::InvalidEmail(email.to_owned()));
        }
        let mut table = match self.store.load_all() {
            Ok(table) => table,
            Err(e) if e.is_not_found() => CredentialTable::new(),
            Err(e) => return Err(e.into()),
        };
        let previous = table.insert(&key, record);
        self.store.save_all(&table)?;
        tracing::info!(
            "{} user {key}",
            if previous.is_some() { "updated" } else { "created" }
        );
        Ok(previous)
    }

    /// Remove a user. Returns the removed record; the document is only
    /// rewritten when something was removed.
    pub fn revoke(&self, email: &str) -> Result<Option<CredentialRecord>, DirectoryError> {
        let mut table = match self.store.load_all() {
            Ok(table) => table,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let removed = table.remove(email);
        if removed.is_some() {
            self.store.save_all(&table)?;
            tracing::info!("revoked user {}", normalize_email(email));
        }
        Ok(removed)
    }
}
