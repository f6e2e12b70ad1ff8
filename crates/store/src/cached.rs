//! Process-local memoization of the credential document.

use crate::{CredentialStore, StoreError};
use identity::CredentialTable;
use parking_lot::Mutex;

/// Remembers the last successfully loaded or saved table.
///
/// A failed load is returned as is and a failed save drops the memo.
#[derive(Debug)]
pub struct CachedStore<S> {
    inner: S,
    memo: Mutex<Option<CredentialTable>>,
}

impl<S: CredentialStore> CachedStore<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            memo: Mutex::new(None),
        }
    }

    /// Forget the memoized table; the next load goes to the backend.
    pub fn invalidate(&self) {
        self.memo.lock().take();
    }

    /// Whether a table is currently memoized.
    pub fn is_warm(&self) -> bool {
        self.memo.lock().is_some()
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: CredentialStore> CredentialStore for CachedStore<S> {
    fn load_all(&self) -> Result<CredentialTable, StoreError> {
        let mut memo = self.memo.lock();
        if let Some(table) = memo.as_ref() {
            tracing::debug!("credential table served from memo");
            return Ok(table.clone());
        }
        let table = self.inner.load_all()?;
        *memo = Some(table.clone());
        Ok(table)
    }

    fn save_all(&self, table: &CredentialTable) -> Result<(), StoreError> {
        let mut memo = self.memo.lock();
        match self.inner.save_all(table) {
            Ok(()) => {
                *memo = Some(table.clone());
                Ok(())
            }
            Err(e) => {
                memo.take();
                Err(e)
            }
        }
    }
}
