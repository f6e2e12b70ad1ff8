//! Storage boundary of the ChatTGP console.
//!
//! The console keeps everything it persists as named objects in a bucket.
//! [`ObjectStore`] is that bucket: whole-object text reads and writes, no
//! partial updates. The credential document is one such object, read and
//! replaced as a whole through a [`CredentialStore`].
//!
//! # Example
//!
//! ```rust,ignore
//! use store::{CachedStore, CredentialStore, FsObjectStore, JsonCredentialStore};
//!
//! let bucket = FsObjectStore::new("/var/lib/chattgp/bucket");
//! let credentials = CachedStore::new(JsonCredentialStore::new(bucket, "auth.json"));
//! let table = credentials.load_all()?;
//! ```

pub use cached::CachedStore;
pub use error::StoreError;
pub use json::{JSON_CONTENT_TYPE, JsonCredentialStore};
pub use object::{FsObjectStore, MemoryObjectStore, ObjectStore};

use identity::CredentialTable;
use std::sync::Arc;

mod cached;
mod error;
mod json;
mod object;

/// Whole-document access to the credential mapping.
///
/// Every failure is a [`StoreError`]; callers treat all of them as the
/// store being unavailable and never fall back to older data.
pub trait CredentialStore: Send + Sync {
    /// Fetch the full mapping.
    fn load_all(&self) -> Result<CredentialTable, StoreError>;

    /// Replace the full mapping.
    fn save_all(&self, table: &CredentialTable) -> Result<(), StoreError>;
}

impl<S: CredentialStore + ?Sized> CredentialStore for Arc<S> {
    fn load_all(&self) -> Result<CredentialTable, StoreError> {
        (**self).load_all()
    }

    fn save_all(&self, table: &CredentialTable) -> Result<(), StoreError> {
        (**self).save_all(table)
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn load_all(&self) -> Result<CredentialTable, StoreError> {
        (**self).load_all()
    }

    fn save_all(&self, table: &CredentialTable) -> Result<(), StoreError> {
        (**self).save_all(table)
    }
}
