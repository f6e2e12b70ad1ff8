//! Login failures and how they are shown to users.

use serde::{Deserialize, Serialize};
use store::StoreError;

/// Why a login attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The credential document could not be read or decoded.
    #[error("credential store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
    /// No record exists for the normalized email.
    #[error("no account found for this email")]
    UnknownAccount,
    /// The record exists but the presented key does not match.
    #[error("invalid API key")]
    InvalidKey,
}

/// How much a failed login tells the user.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureDisclosure {
    /// Unknown account and wrong key read the same.
    #[default]
    Generic,
    /// Say which of the two happened.
    Detailed,
}

impl AuthError {
    /// Message shown on the login form.
    pub fn user_message(&self, disclosure: FailureDisclosure) -> &'static str {
        match (self, disclosure) {
            (Self::StoreUnavailable(_), _) => {
                "Authentication is temporarily unavailable. Please try again."
            }
            (Self::UnknownAccount | Self::InvalidKey, FailureDisclosure::Generic) => {
                "Invalid email or API key."
            }
            (Self::UnknownAccount, FailureDisclosure::Detailed) => {
                "No account found for this email."
            }
            (Self::InvalidKey, FailureDisclosure::Detailed) => "Invalid API key. Please try again.",
        }
    }
}
