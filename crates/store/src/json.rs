//! The credential document as a JSON object in the bucket.

use crate::{CredentialStore, ObjectStore, StoreError};
use identity::CredentialTable;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Content type recorded for the credential document.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Credential store reading and replacing one JSON object.
#[derive(Debug, Clone)]
pub struct JsonCredentialStore<O> {
    objects: O,
    name: String,
}

impl<O: ObjectStore> JsonCredentialStore<O> {
    /// Store the credential document as object `name` in `objects`.
    pub fn new(objects: O, name: impl Into<String>) -> Self {
        Self {
            objects,
            name: name.into(),
        }
    }

    /// Object name of the credential document.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying bucket.
    pub fn objects(&self) -> &O {
        &self.objects
    }
}

impl<O: ObjectStore> CredentialStore for JsonCredentialStore<O> {
    fn load_all(&self) -> Result<CredentialTable, StoreError> {
        let text = self.objects.read_text(&self.name)?;
        let table: CredentialTable =
            serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
                name: self.name.clone(),
                source,
            })?;
        tracing::debug!("loaded {} credential records from {}", table.len(), self.name);
        Ok(table)
    }

    fn save_all(&self, table: &CredentialTable) -> Result<(), StoreError> {
        let text = to_document(table).map_err(|source| StoreError::Malformed {
            name: self.name.clone(),
            source,
        })?;
        self.objects.write_text(&self.name, &text, JSON_CONTENT_TYPE)?;
        tracing::debug!("saved {} credential records to {}", table.len(), self.name);
        Ok(())
    }
}

/// Render the document with four-space indentation, matching the files
/// the rest of the console tooling writes.
fn to_document(table: &CredentialTable) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    table.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use identity::{CredentialRecord, Role};

    #[test]
    fn document_uses_four_space_indent() {
        let mut table = CredentialTable::new();
        table.insert("alice@co.com", CredentialRecord::new(Role::Admin));
        let text = to_document(&table).unwrap();
        assert_eq!(
            text,
            "{\n    \"alice@co.com\": {\n        \"role\": \"admin\",\n        \"permissions\": []\n    }\n}"
        );
    }
}
