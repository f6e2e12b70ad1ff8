//! Shared helpers for gate tests.

#![allow(dead_code)]

use auth::{AuthError, Authenticator};
use gate::{LoginForm, SessionContext};
use identity::{CredentialRecord, Role, SessionIdentity};

/// Accepts any key for a fixed identity.
pub struct Fixed(pub Option<SessionIdentity>);

impl Authenticator for Fixed {
    fn login(&self, email: &str, _presented_key: &str) -> Result<SessionIdentity, AuthError> {
        match &self.0 {
            Some(known) if known.email() == identity::normalize_email(email).as_str() => {
                Ok(known.clone())
            }
            _ => Err(AuthError::UnknownAccount),
        }
    }
}

/// A session logged in with `role`, notices drained.
pub fn signed_in(role: Option<Role>) -> SessionContext {
    let record = CredentialRecord {
        role,
        ..CredentialRecord::default()
    };
    let identity = SessionIdentity::new("user@co.com", record);
    let mut ctx = SessionContext::new();
    LoginForm::default()
        .submit(&mut ctx, &Fixed(Some(identity)), "user@co.com", "key")
        .unwrap();
    ctx.take_notices();
    ctx
}
