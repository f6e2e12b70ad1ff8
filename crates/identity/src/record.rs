//! Credential records and the email-keyed table holding them.

use crate::{Role, normalize_email};
use compact_str::CompactString;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet, btree_map};

/// Stored authorization metadata for one user.
///
/// The record holds no secret: the user's key is re-derived from the
/// email and the master key on every login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Role, `None` when absent or not one of the known roles.
    #[serde(
        default,
        deserialize_with = "lenient_role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
    /// Capability strings granted on top of the role.
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

impl CredentialRecord {
    /// Create a record with the given role and no permissions.
    pub fn new(role: Role) -> Self {
        Self {
            name: None,
            role: Some(role),
            permissions: BTreeSet::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a permission.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.insert(permission.into());
        self
    }

    /// Check whether the record carries `permission`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// Unknown role strings rank below every tier instead of failing the
/// whole document.
fn lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|role| match role.parse() {
        Ok(role) => Some(role),
        Err(e) => {
            tracing::warn!("ignoring credential role: {e}");
            None
        }
    }))
}

/// The whole credential document: normalized email to record.
///
/// Keys are normalized on every path in, including deserialization, so
/// a hand-edited document with `Alice@Co.com` still resolves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CredentialTable {
    records: BTreeMap<CompactString, CredentialRecord>,
}

impl CredentialTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record for `email`, normalizing it first.
    pub fn get(&self, email: &str) -> Option<&CredentialRecord> {
        self.records.get(&normalize_email(email))
    }

    /// Whether a record exists for `email`.
    pub fn contains(&self, email: &str) -> bool {
        self.get(email).is_some()
    }

    /// Insert or replace the record for `email`. Returns the previous one.
    pub fn insert(&mut self, email: &str, record: CredentialRecord) -> Option<CredentialRecord> {
        self.records.insert(normalize_email(email), record)
    }

    /// Remove the record for `email`. Returns it if it existed.
    pub fn remove(&mut self, email: &str) -> Option<CredentialRecord> {
        self.records.remove(&normalize_email(email))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(email, record)` pairs in email order.
    pub fn iter(&self) -> btree_map::Iter<'_, CompactString, CredentialRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a CredentialTable {
    type Item = (&'a CompactString, &'a CredentialRecord);
    type IntoIter = btree_map::Iter<'a, CompactString, CredentialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<K: AsRef<str>> FromIterator<(K, CredentialRecord)> for CredentialTable {
    fn from_iter<I: IntoIterator<Item = (K, CredentialRecord)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (email, record) in iter {
            let raw = email.as_ref();
            let key = normalize_email(raw);
            if key != raw {
                tracing::warn!("credential key '{raw}' stored as '{key}'");
            }
            if table.records.insert(key.clone(), record).is_some() {
                tracing::warn!("duplicate credential for '{key}', keeping the last one");
            }
        }
        table
    }
}

impl<'de> Deserialize<'de> for CredentialTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, CredentialRecord>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}
