pub mod contact;
pub mod ids;
pub mod number;
pub mod phone;

pub use contact::{Contact, ContactKind};
pub use ids::{ContactId, ContactNumberId, JournalEntryId};
pub use number::{ContactNumber, MatchKind};
pub use phone::{is_private_number, normalize_number};
