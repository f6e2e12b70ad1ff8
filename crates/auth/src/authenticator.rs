//! Login against the credential store.

use crate::{AuthError, MasterKey, verify_key};
use identity::{SessionIdentity, normalize_email};
use store::CredentialStore;

/// Verifies a claimed identity and its key.
pub trait Authenticator: Send + Sync {
    /// Authenticate `email` with `presented_key`.
    fn login(&self, email: &str, presented_key: &str) -> Result<SessionIdentity, AuthError>;
}

/// Authenticates against HMAC-derived keys and a credential store.
///
/// The store is read once per attempt; nothing is retried.
pub struct HmacAuthenticator<S> {
    store: S,
    master_key: MasterKey,
}

impl<S: CredentialStore> HmacAuthenticator<S> {
    /// Create an authenticator over `store` using `master_key`.
    pub fn new(store: S, master_key: MasterKey) -> Self {
        Self { store, master_key }
    }

    /// The credential store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: CredentialStore> Authenticator for HmacAuthenticator<S> {
    fn login(&self, email: &str, presented_key: &str) -> Result<SessionIdentity, AuthError> {
        let email = normalize_email(email);
        let table = self.store.load_all().inspect_err(|e| {
            tracing::error!("login for {email} aborted, credential store unavailable: {e}");
        })?;

        let Some(record) = table.get(&email) else {
            tracing::warn!("login failed for {email}: unknown account");
            return Err(AuthError::UnknownAccount);
        };

        if !verify_key(&email, presented_key, &self.master_key) {
            tracing::warn!("login failed for {email}: invalid key");
            return Err(AuthError::InvalidKey);
        }

        tracing::info!("login succeeded for {email}");
        Ok(SessionIdentity::new(&email, record.clone()))
    }
}
