//! Bucket-style object storage.

use crate::StoreError;
use parking_lot::Mutex;
use std::{
    collections::BTreeMap,
    io::{self, Write},
    path::{Component, Path, PathBuf},
};

/// Named text objects in a bucket.
///
/// Reads and writes always cover the whole object.
pub trait ObjectStore: Send + Sync {
    /// Read an object as text.
    fn read_text(&self, name: &str) -> Result<String, StoreError>;

    /// Create or replace an object.
    fn write_text(&self, name: &str, content: &str, content_type: &str) -> Result<(), StoreError>;
}

/// Directory-backed bucket. Object names are relative paths below the root.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    /// Use `root` as the bucket directory. It is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Bucket directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn object_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(name);
        let inside = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !inside {
            return Err(StoreError::InvalidName { name: name.into() });
        }
        Ok(self.root.join(relative))
    }
}

impl ObjectStore for FsObjectStore {
    fn read_text(&self, name: &str) -> Result<String, StoreError> {
        let path = self.object_path(name)?;
        tracing::debug!("reading object {}", path.display());
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound { name: name.into() },
            _ => StoreError::Read {
                name: name.into(),
                source,
            },
        })
    }

    /// Writes go to a temporary file in the same directory which is then
    /// renamed over the object, so readers see the old or the new content.
    fn write_text(&self, name: &str, content: &str, content_type: &str) -> Result<(), StoreError> {
        let path = self.object_path(name)?;
        let write_err = |source| StoreError::Write {
            name: name.into(),
            source,
        };
        let dir = path.parent().unwrap_or(&self.root);
        std::fs::create_dir_all(dir).map_err(write_err)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&path).map_err(|e| write_err(e.error))?;
        tracing::debug!("wrote object {} ({content_type})", path.display());
        Ok(())
    }
}

/// In-process bucket for tests and dry runs.
///
/// Can be switched offline to simulate an unreachable backend.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: Mutex<BTreeMap<String, StoredObject>>,
    offline: Mutex<bool>,
}

#[derive(Debug, Clone)]
struct StoredObject {
    content: String,
    content_type: String,
}

impl MemoryObjectStore {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bucket holding one object.
    pub fn with_object(name: &str, content: &str) -> Self {
        let store = Self::new();
        store.put(name, content, crate::JSON_CONTENT_TYPE);
        store
    }

    fn put(&self, name: &str, content: &str, content_type: &str) {
        self.objects.lock().insert(
            name.to_owned(),
            StoredObject {
                content: content.to_owned(),
                content_type: content_type.to_owned(),
            },
        );
    }

    /// Content type recorded for an object.
    pub fn content_type(&self, name: &str) -> Option<String> {
        self.objects
            .lock()
            .get(name)
            .map(|o| o.content_type.clone())
    }

    /// Make every subsequent call fail (`true`) or succeed again (`false`).
    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock() = offline;
    }

    fn check_online(&self, name: &str, write: bool) -> Result<(), StoreError> {
        if !*self.offline.lock() {
            return Ok(());
        }
        let source = io::Error::new(io::ErrorKind::NotConnected, "bucket offline");
        Err(if write {
            StoreError::Write {
                name: name.into(),
                source,
            }
        } else {
            StoreError::Read {
                name: name.into(),
                source,
            }
        })
    }
}

impl ObjectStore for MemoryObjectStore {
    fn read_text(&self, name: &str) -> Result<String, StoreError> {
        self.check_online(name, false)?;
        self.objects
            .lock()
            .get(name)
            .map(|o| o.content.clone())
            .ok_or_else(|| StoreError::NotFound { name: name.into() })
    }

    fn write_text(&self, name: &str, content: &str, content_type: &str) -> Result<(), StoreError> {
        self.check_online(name, true)?;
        self.put(name, content, content_type);
        Ok(())
    }
}

impl<O: ObjectStore + ?Sized> ObjectStore for std::sync::Arc<O> {
    fn read_text(&self, name: &str) -> Result<String, StoreError> {
        (**self).read_text(name)
    }

    fn write_text(&self, name: &str, content: &str, content_type: &str) -> Result<(), StoreError> {
        (**self).write_text(name, content, content_type)
    }
}
