//! Email normalization.

use compact_str::CompactString;

/// Normalize an email address for use as a credential key.
///
/// Trims surrounding whitespace and lower-cases the rest. The result is
/// not validated as an address: a malformed email simply has no record.
pub fn normalize_email(email: &str) -> CompactString {
    CompactString::new(email.trim().to_lowercase())
}
