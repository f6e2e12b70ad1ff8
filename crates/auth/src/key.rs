//! Key derivation and constant-time verification.

use hmac::{Hmac, Mac};
use identity::normalize_email;
use sha2::Sha256;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

type HmacSha256 = Hmac<Sha256>;

/// Process-wide secret every user key is derived from.
///
/// Wiped from memory on drop and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey(String);

impl MasterKey {
    /// Wrap a secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Whether the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterKey(***)")
    }
}

impl From<&str> for MasterKey {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

/// Derive the key for `email`: lower-case hex HMAC-SHA256 of the
/// normalized email, keyed by `master_key`.
pub fn issue_key(email: &str, master_key: &MasterKey) -> String {
    let Ok(mut mac) = HmacSha256::new_from_slice(master_key.as_bytes()) else {
        unreachable!("hmac accepts keys of any length");
    };
    mac.update(normalize_email(email).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check a presented key against the one derived for `email`.
///
/// The presented key is compared byte for byte as given; it is not
/// trimmed or case-folded.
pub fn verify_key(email: &str, presented_key: &str, master_key: &MasterKey) -> bool {
    let expected = issue_key(email, master_key);
    constant_time_eq(expected.as_bytes(), presented_key.as_bytes())
}

/// Compare two byte strings in time independent of where they differ.
///
/// Only the lengths are compared early; derived keys have a fixed length.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    use subtle::ConstantTimeEq;
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
