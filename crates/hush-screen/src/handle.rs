use hush_store::Store;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

/// Shared handle to the rule store.
///
/// Opening is deferred to first use and may fail (missing file permissions,
/// corrupt schema); callers get `None` for as long as the store cannot be
/// opened, and a later call may succeed once the cause is gone. Once open,
/// every caller shares the same connection.
pub struct StoreHandle {
    path: Option<PathBuf>,
    slot: Mutex<Option<Arc<Mutex<Store>>>>,
}

impl StoreHandle {
    /// Handle that opens (and migrates) the database at `path` on first use.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            slot: Mutex::new(None),
        }
    }

    /// Handle over an already-open store.
    pub fn with_store(store: Store) -> Self {
        Self {
            path: None,
            slot: Mutex::new(Some(Arc::new(Mutex::new(store)))),
        }
    }

    pub fn get(&self) -> Option<Arc<Mutex<Store>>> {
        let mut slot = match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        if slot.is_none() {
            let path = self.path.as_deref()?;
            match open_store(path) {
                Ok(store) => *slot = Some(Arc::new(Mutex::new(store))),
                Err(err) => {
                    warn!(error = %err, "rule store unavailable");
                    return None;
                }
            }
        }
        slot.clone()
    }
}

pub(crate) fn lock(store: &Mutex<Store>) -> MutexGuard<'_, Store> {
    match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn open_store(path: &Path) -> hush_store::error::Result<Store> {
    let store = Store::open(path)?;
    store.migrate()?;
    Ok(store)
}
