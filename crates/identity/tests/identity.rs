//! Tests for roles, credential records and the credential table.

use identity::{CredentialRecord, CredentialTable, Role, SessionIdentity, normalize_email};
use proptest::prelude::*;

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize_email("  Alice@CO.com \n"), "alice@co.com");
    assert_eq!(normalize_email("bob@co.com"), "bob@co.com");
    assert_eq!(normalize_email(""), "");
}

#[test]
fn role_ordering() {
    assert!(Role::Viewer < Role::Editor);
    assert!(Role::Editor < Role::Admin);
    assert!(Role::Admin.at_least(Role::Editor));
    assert!(Role::Editor.at_least(Role::Editor));
    assert!(!Role::Viewer.at_least(Role::Editor));
    for pair in Role::ALL.windows(2) {
        assert!(pair[0].rank() < pair[1].rank());
    }
}

#[test]
fn role_parse_and_display() {
    for role in Role::ALL {
        assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
    }
    let err = "root".parse::<Role>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown role 'root', expected one of admin, editor, viewer"
    );
}

#[test]
fn parse_credential_document() {
    let json = r#"{
        "alice@co.com": {"name": "Alice", "role": "admin", "permissions": ["deploy"]},
        "bob@co.com": {"role": "viewer", "permissions": []}
    }"#;
    let table: CredentialTable = serde_json::from_str(json).unwrap();
    assert_eq!(table.len(), 2);

    let alice = table.get("alice@co.com").unwrap();
    assert_eq!(alice.name.as_deref(), Some("Alice"));
    assert_eq!(alice.role, Some(Role::Admin));
    assert!(alice.has_permission("deploy"));
    assert!(!alice.has_permission("delete"));

    let bob = table.get("bob@co.com").unwrap();
    assert_eq!(bob.name, None);
    assert_eq!(bob.role, Some(Role::Viewer));
}

#[test]
fn unknown_or_missing_role_is_none() {
    let json = r#"{
        "a@co.com": {"role": "superuser", "permissions": []},
        "b@co.com": {"permissions": ["x"]},
        "c@co.com": {}
    }"#;
    let table: CredentialTable = serde_json::from_str(json).unwrap();
    assert_eq!(table.get("a@co.com").unwrap().role, None);
    assert_eq!(table.get("b@co.com").unwrap().role, None);
    assert!(table.get("c@co.com").unwrap().permissions.is_empty());
}

#[test]
fn document_keys_are_normalized_on_load() {
    let json = r#"{" Alice@CO.com ": {"role": "editor", "permissions": []}}"#;
    let table: CredentialTable = serde_json::from_str(json).unwrap();
    let (key, _) = table.iter().next().unwrap();
    assert_eq!(key, "alice@co.com");
    assert!(table.contains("ALICE@co.com"));
}

#[test]
fn malformed_document_is_rejected() {
    assert!(serde_json::from_str::<CredentialTable>(r#"["alice@co.com"]"#).is_err());
    assert!(
        serde_json::from_str::<CredentialTable>(r#"{"a@co.com": {"permissions": "x"}}"#).is_err()
    );
}

#[test]
fn serialize_skips_absent_fields() {
    let mut table = CredentialTable::new();
    table.insert("Carol@Co.com", CredentialRecord::new(Role::Editor));
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"carol@co.com": {"role": "editor", "permissions": []}})
    );
}

#[test]
fn insert_replace_and_remove() {
    let mut table = CredentialTable::new();
    assert!(table.insert("a@co.com", CredentialRecord::new(Role::Viewer)).is_none());
    let prev = table.insert("A@CO.COM", CredentialRecord::new(Role::Admin));
    assert_eq!(prev.unwrap().role, Some(Role::Viewer));
    assert_eq!(table.len(), 1);

    assert!(table.remove(" a@co.com").is_some());
    assert!(table.is_empty());
    assert!(table.remove("a@co.com").is_none());
}

#[test]
fn session_identity_accessors() {
    let record = CredentialRecord::new(Role::Editor)
        .with_name("Dana")
        .with_permission("whitelist");
    let identity = SessionIdentity::new(" Dana@Co.com", record);
    assert_eq!(identity.email(), "dana@co.com");
    assert_eq!(identity.display_name(), "Dana");
    assert_eq!(identity.role_label(), "editor");
    assert!(identity.meets(Role::Viewer));
    assert!(identity.meets(Role::Editor));
    assert!(!identity.meets(Role::Admin));
    assert!(identity.has_permission("whitelist"));
}

#[test]
fn identity_without_role_meets_nothing() {
    let identity = SessionIdentity::new("x@co.com", CredentialRecord::default());
    assert_eq!(identity.display_name(), "x@co.com");
    assert_eq!(identity.role_label(), "none");
    for role in Role::ALL {
        assert!(!identity.meets(role));
    }
}

proptest! {
    #[test]
    fn lookup_ignores_case_and_padding(
        local in "[a-z0-9.]{1,12}",
        domain in "[a-z]{1,8}\\.[a-z]{2,3}",
        upper in proptest::collection::vec(any::<bool>(), 0..24),
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let email = format!("{local}@{domain}");
        let mut table = CredentialTable::new();
        table.insert(&email, CredentialRecord::new(Role::Editor));

        let variant: String = email
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if upper.get(i).copied().unwrap_or(false) {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        let query = format!("{left}{variant}{right}");
        prop_assert_eq!(table.get(&query), table.get(&email));
        prop_assert!(table.get(&query).is_some());
    }
}
