pub mod caps;
pub mod directory;
pub mod handle;
pub mod screen;
pub mod settings;
pub mod telephony;

pub use caps::{Capability, CapabilityProbe, PermissionCache};
pub use directory::{DirectoryEntry, DirectoryLookup};
pub use handle::StoreHandle;
pub use screen::{CallEvent, Decision, Screener, Screening};
pub use settings::{SettingsCache, ENABLE_WHITELIST};
pub use telephony::{CallControl, CallState};
