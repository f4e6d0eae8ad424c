use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Capabilities the hosting platform may grant or withhold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// May read call state and end the active call.
    CallControl,
    /// May read the personal directory.
    DirectoryRead,
}

pub trait CapabilityProbe: Send + Sync {
    fn is_granted(&self, capability: Capability) -> bool;
}

/// Caches grant checks for the life of the process.
///
/// A grant observed once is never re-checked, so a platform-side revocation
/// goes unnoticed until restart. Revocation is rare enough that the stale
/// read is accepted.
pub struct PermissionCache {
    probe: Arc<dyn CapabilityProbe>,
    grants: Mutex<HashMap<Capability, bool>>,
}

impl PermissionCache {
    pub fn new(probe: Arc<dyn CapabilityProbe>) -> Self {
        Self {
            probe,
            grants: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_granted(&self, capability: Capability) -> bool {
        let mut grants = match self.grants.lock() {
            Ok(grants) => grants,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(granted) = grants.get(&capability) {
            return *granted;
        }
        let granted = self.probe.is_granted(capability);
        grants.insert(capability, granted);
        granted
    }
}
