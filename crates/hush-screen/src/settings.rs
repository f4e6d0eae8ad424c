use crate::handle::{lock, StoreHandle};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Screening mode: terminate calls unless explicitly allowed.
pub const ENABLE_WHITELIST: &str = "ENABLE_WHITELIST";

const TRUE: &str = "TRUE";
const FALSE: &str = "FALSE";

/// Write-through cache over the persisted settings table.
///
/// Reads populate the cache lazily; a write reaches the cache only after
/// the store confirms it. Nothing else invalidates entries, so another
/// process writing the same database is not observed.
pub struct SettingsCache {
    store: Arc<StoreHandle>,
    values: RwLock<HashMap<String, String>>,
}

impl SettingsCache {
    pub fn new(store: Arc<StoreHandle>) -> Self {
        Self {
            store,
            values: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        if let Ok(values) = self.values.read() {
            if let Some(value) = values.get(name) {
                return Some(value.clone());
            }
        }

        let store = self.store.get()?;
        let value = {
            let guard = lock(&store);
            match guard.settings().get(name) {
                Ok(value) => value,
                Err(err) => {
                    warn!(error = %err, name, "settings read failed");
                    return None;
                }
            }
        }?;

        if let Ok(mut values) = self.values.write() {
            values.insert(name.to_string(), value.clone());
        }
        Some(value)
    }

    pub fn set_string(&self, name: &str, value: &str) -> bool {
        let Some(store) = self.store.get() else {
            return false;
        };
        {
            let guard = lock(&store);
            if let Err(err) = guard.settings().set(name, value) {
                warn!(error = %err, name, "settings write failed");
                return false;
            }
        }
        if let Ok(mut values) = self.values.write() {
            values.insert(name.to_string(), value.to_string());
        }
        true
    }

    pub fn get_bool(&self, name: &str) -> bool {
        self.get_string(name).as_deref() == Some(TRUE)
    }

    pub fn set_bool(&self, name: &str, value: bool) -> bool {
        self.set_string(name, if value { TRUE } else { FALSE })
    }
}
