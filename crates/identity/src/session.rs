//! The identity a session carries after login.

use crate::{CredentialRecord, Role, normalize_email};
use compact_str::CompactString;

/// Proof that the current session belongs to an authenticated user.
///
/// Built only from a record found under the normalized email, so the
/// email here always equals the credential key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    email: CompactString,
    record: CredentialRecord,
}

impl SessionIdentity {
    /// Create an identity for `email` backed by `record`.
    pub fn new(email: &str, record: CredentialRecord) -> Self {
        Self {
            email: normalize_email(email),
            record,
        }
    }

    /// Normalized email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Role from the record, if it names a known one.
    pub fn role(&self) -> Option<Role> {
        self.record.role
    }

    /// The full credential record.
    pub fn record(&self) -> &CredentialRecord {
        &self.record
    }

    /// Whether the role ranks at or above `required`. An absent role
    /// meets no tier.
    pub fn meets(&self, required: Role) -> bool {
        self.record.role.is_some_and(|role| role.at_least(required))
    }

    /// Check a fine-grained permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.record.has_permission(permission)
    }

    /// Name for the session box: the display name, else the email.
    pub fn display_name(&self) -> &str {
        self.record.name.as_deref().unwrap_or(&self.email)
    }

    /// Role label for the session box.
    pub fn role_label(&self) -> &'static str {
        self.record.role.map_or("none", Role::as_str)
    }
}
