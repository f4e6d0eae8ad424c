pub mod contacts;
pub mod journal;
pub mod settings;

pub use contacts::{ContactNew, ContactUpdate, ContactsRepo, NumberNew};
pub use journal::{JournalEntry, JournalRepo};
pub use settings::SettingsRepo;
