//! Data model shared by the nameplate crates: the user record as handed
//! over by the record layer, and the well-known account identifiers.

pub mod constants;
pub mod types;

pub use types::{
    EmojiStatus, PeerColor, PhotoRef, ProfilePhoto, RecordVariant, UserFullRecord, UserRecord,
    UsernameEntry,
};
