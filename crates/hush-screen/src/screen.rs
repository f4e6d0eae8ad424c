use crate::caps::{Capability, CapabilityProbe, PermissionCache};
use crate::directory::DirectoryLookup;
use crate::handle::{lock, StoreHandle};
use crate::settings::{SettingsCache, ENABLE_WHITELIST};
use crate::telephony::{CallControl, CallState};
use hush_core::domain::{is_private_number, normalize_number, Contact, ContactKind};
use std::sync::Arc;
use tracing::{debug, warn};

const PRIVATE_CALLER: &str = "Private number";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Terminate,
}

/// Outcome of screening one caller id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screening {
    pub decision: Decision,
    /// Display name for the caller, when one could be resolved.
    pub caller: Option<String>,
    /// The normalized number the rules were evaluated against.
    pub number: Option<String>,
}

/// One incoming-call notification as delivered by the platform.
#[derive(Debug, Clone)]
pub struct CallEvent {
    pub number: Option<String>,
    pub state: CallState,
    /// Epoch milliseconds, supplied by the event source.
    pub received_at: i64,
}

/// Decides whether an incoming call rings through or is terminated.
///
/// Every internal failure resolves to [`Decision::Allow`]; screening never
/// blocks a call because of its own faults and never returns an error to
/// the event source.
pub struct Screener {
    store: Arc<StoreHandle>,
    settings: SettingsCache,
    permissions: PermissionCache,
    directory: Arc<dyn DirectoryLookup>,
    telephony: Arc<dyn CallControl>,
}

impl Screener {
    pub fn new(
        store: Arc<StoreHandle>,
        probe: Arc<dyn CapabilityProbe>,
        directory: Arc<dyn DirectoryLookup>,
        telephony: Arc<dyn CallControl>,
    ) -> Self {
        Self {
            settings: SettingsCache::new(store.clone()),
            permissions: PermissionCache::new(probe),
            store,
            directory,
            telephony,
        }
    }

    pub fn settings(&self) -> &SettingsCache {
        &self.settings
    }

    /// Handles one incoming-call event end to end: gates on call state and
    /// the call-control capability, screens the caller id, and on a
    /// terminate decision ends the call (once, best effort) and journals it.
    pub fn on_incoming_call(&self, event: &CallEvent) -> Decision {
        if !self.permissions.is_granted(Capability::CallControl) {
            return Decision::Allow;
        }
        if event.state != CallState::Ringing {
            return Decision::Allow;
        }

        let screening = self.screen(event.number.as_deref());
        if screening.decision == Decision::Terminate {
            if !self.telephony.terminate_current_call() {
                warn!("call termination reported failure");
            }
            self.record_terminated(event.received_at, &screening);
        }
        screening.decision
    }

    /// Screens a raw caller id without side effects.
    pub fn screen(&self, raw_number: Option<&str>) -> Screening {
        if is_private_number(raw_number) {
            let decision = if self.settings.get_bool(ENABLE_WHITELIST) {
                Decision::Terminate
            } else {
                Decision::Allow
            };
            return Screening {
                decision,
                caller: Some(PRIVATE_CALLER.to_string()),
                number: None,
            };
        }

        let number = normalize_number(raw_number.unwrap_or(""));
        if number.is_empty() {
            warn!("incoming call address is empty");
            return Screening {
                decision: Decision::Allow,
                caller: None,
                number: None,
            };
        }

        let contacts = match self.matching_contacts(&number) {
            Some(contacts) => contacts,
            // Store unavailable: fail open rather than block the call.
            None => {
                return Screening {
                    decision: Decision::Allow,
                    caller: None,
                    number: Some(number),
                }
            }
        };

        if let Some(white) = contacts
            .iter()
            .find(|contact| contact.kind == ContactKind::WhiteList)
        {
            return Screening {
                decision: Decision::Allow,
                caller: Some(white.name.clone()),
                number: Some(number),
            };
        }

        let caller = contacts.first().map(|contact| contact.name.clone());

        if !self.settings.get_bool(ENABLE_WHITELIST) {
            return Screening {
                decision: Decision::Allow,
                caller,
                number: Some(number),
            };
        }

        if self.permissions.is_granted(Capability::DirectoryRead) {
            if let Some(entry) = self.directory.lookup(&number) {
                debug!(name = %entry.name, "caller present in directory");
                return Screening {
                    decision: Decision::Allow,
                    caller: Some(entry.name),
                    number: Some(number),
                };
            }
        }

        Screening {
            decision: Decision::Terminate,
            caller: caller.or_else(|| Some(number.clone())),
            number: Some(number),
        }
    }

    fn matching_contacts(&self, number: &str) -> Option<Vec<Contact>> {
        let store = self.store.get()?;
        let guard = lock(&store);
        match guard.contacts().find_contacts_by_number(number, false) {
            Ok(contacts) => Some(contacts),
            Err(err) => {
                warn!(error = %err, "rule lookup failed, allowing call");
                None
            }
        }
    }

    fn record_terminated(&self, time: i64, screening: &Screening) {
        let Some(store) = self.store.get() else {
            return;
        };
        let guard = lock(&store);
        let caller = screening.caller.as_deref().unwrap_or(PRIVATE_CALLER);
        if let Err(err) = guard
            .journal()
            .add(time, caller, screening.number.as_deref(), None)
        {
            warn!(error = %err, "failed to journal terminated call");
        }
    }
}
