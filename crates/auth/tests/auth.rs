//! Authentication tests.

use auth::{
    AuthError, Authenticator, FailureDisclosure, HmacAuthenticator, MasterKey, issue_key,
    verify_key,
};
use identity::Role;
use proptest::prelude::*;
use std::sync::Arc;
use store::{JsonCredentialStore, MemoryObjectStore};

const DOCUMENT: &str = r#"{"alice@co.com": {"role": "admin", "permissions": []}}"#;

fn authenticator(master_key: &str) -> HmacAuthenticator<JsonCredentialStore<MemoryObjectStore>> {
    let bucket = MemoryObjectStore::with_object("auth.json", DOCUMENT);
    HmacAuthenticator::new(
        JsonCredentialStore::new(bucket, "auth.json"),
        MasterKey::new(master_key),
    )
}

#[test]
fn issued_key_logs_in() {
    let auth = authenticator("K");
    let key = issue_key("Alice@CO.com", &MasterKey::new("K"));
    let session = auth.login("alice@co.com", &key).unwrap();
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.email(), "alice@co.com");
}

#[test]
fn unknown_account_rejected() {
    let auth = authenticator("K");
    let err = auth.login("bob@co.com", "anything").unwrap_err();
    assert!(matches!(err, AuthError::UnknownAccount));
}

#[test]
fn wrong_key_rejected() {
    let auth = authenticator("K");
    let err = auth.login("alice@co.com", "wrong-key").unwrap_err();
    assert!(matches!(err, AuthError::InvalidKey));
}

#[test]
fn empty_key_rejected() {
    let auth = authenticator("K");
    let err = auth.login("alice@co.com", "").unwrap_err();
    assert!(matches!(err, AuthError::InvalidKey));
}

#[test]
fn email_is_normalized_before_lookup() {
    let auth = authenticator("K");
    let key = issue_key("alice@co.com", &MasterKey::new("K"));
    for email in ["ALICE@co.com", "  alice@co.com", "Alice@Co.Com\t"] {
        let session = auth.login(email, &key).unwrap();
        assert_eq!(session.email(), "alice@co.com");
    }
}

#[test]
fn rotated_master_key_revokes_issued_keys() {
    let old = issue_key("alice@co.com", &MasterKey::new("K"));
    let auth = authenticator("K2");
    let err = auth.login("alice@co.com", &old).unwrap_err();
    assert!(matches!(err, AuthError::InvalidKey));

    let new = issue_key("alice@co.com", &MasterKey::new("K2"));
    assert!(auth.login("alice@co.com", &new).is_ok());
}

#[test]
fn store_unavailable_is_fatal() {
    let bucket = Arc::new(MemoryObjectStore::with_object("auth.json", DOCUMENT));
    let auth = HmacAuthenticator::new(
        JsonCredentialStore::new(Arc::clone(&bucket), "auth.json"),
        MasterKey::new("K"),
    );
    let key = issue_key("alice@co.com", &MasterKey::new("K"));
    assert!(auth.login("alice@co.com", &key).is_ok());

    bucket.set_offline(true);
    let err = auth.login("alice@co.com", &key).unwrap_err();
    assert!(matches!(err, AuthError::StoreUnavailable(_)));
}

#[test]
fn malformed_store_is_unavailable() {
    let bucket = MemoryObjectStore::with_object("auth.json", "not json");
    let auth = HmacAuthenticator::new(
        JsonCredentialStore::new(bucket, "auth.json"),
        MasterKey::new("K"),
    );
    let err = auth.login("alice@co.com", "x").unwrap_err();
    assert!(matches!(err, AuthError::StoreUnavailable(_)));
}

#[test]
fn issued_key_shape() {
    let key = issue_key("alice@co.com", &MasterKey::new("K"));
    assert_eq!(key.len(), 64);
    assert!(key.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

#[test]
fn user_messages() {
    let generic = FailureDisclosure::Generic;
    assert_eq!(
        AuthError::UnknownAccount.user_message(generic),
        AuthError::InvalidKey.user_message(generic)
    );
    assert_eq!(
        AuthError::InvalidKey.user_message(generic),
        "Invalid email or API key."
    );

    let detailed = FailureDisclosure::Detailed;
    assert_eq!(
        AuthError::UnknownAccount.user_message(detailed),
        "No account found for this email."
    );
    assert_eq!(
        AuthError::InvalidKey.user_message(detailed),
        "Invalid API key. Please try again."
    );
    assert_eq!(FailureDisclosure::default(), FailureDisclosure::Generic);
}

#[test]
fn auth_error_display() {
    assert_eq!(
        AuthError::UnknownAccount.to_string(),
        "no account found for this email"
    );
    assert_eq!(AuthError::InvalidKey.to_string(), "invalid API key");
}

/// Near misses of a valid key.
fn mutations(key: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (i, c) in key.char_indices() {
        let replacement = if c == '0' { '1' } else { '0' };
        let mut mutated = key.to_owned();
        mutated.replace_range(i..i + 1, &replacement.to_string());
        out.push(mutated);
    }
    out.push(key.to_uppercase());
    out.push(key[..key.len() - 1].to_owned());
    out.push(format!("{key}0"));
    out.push(format!(" {key}"));
    out
}

proptest! {
    #[test]
    fn issue_key_is_deterministic(
        email in "[a-z]{1,10}@[a-z]{1,8}\\.com",
        master in "[ -~]{1,24}",
    ) {
        let master = MasterKey::new(master);
        prop_assert_eq!(issue_key(&email, &master), issue_key(&email, &master));
    }

    #[test]
    fn issue_key_depends_on_both_inputs(
        email in "[a-z]{1,10}@[a-z]{1,8}\\.com",
        other in "[a-z]{1,10}@[a-z]{1,8}\\.org",
        master in "[ -~]{1,24}",
        suffix in "[ -~]{1,4}",
    ) {
        let key = MasterKey::new(master.clone());
        let rotated = MasterKey::new(format!("{master}{suffix}"));
        prop_assert_ne!(issue_key(&email, &key), issue_key(&other, &key));
        prop_assert_ne!(issue_key(&email, &key), issue_key(&email, &rotated));
    }

    #[test]
    fn near_miss_keys_fail(email in "[a-z]{1,10}@[a-z]{1,8}\\.com", master in "[ -~]{1,24}") {
        let master = MasterKey::new(master);
        let key = issue_key(&email, &master);
        prop_assert!(verify_key(&email, &key, &master));
        for near in mutations(&key) {
            prop_assert!(!verify_key(&email, &near, &master), "{} accepted", near);
        }
    }
}
