//! # nameplate-resolve
//!
//! Derives what the UI shows for a user (names, handle, avatar presence,
//! status badge, theme colors) from a [`UserRecord`] and a ranked chain of
//! override providers.
//!
//! Everything here is pure and total. A missing record is a valid input
//! and resolves to the same placeholders as a deleted account; a missing
//! value is `None`, never an error. The only clock reads are in
//! [`status`], and each has an `_at` twin that takes `now` explicitly.
//!
//! [`UserRecord`]: nameplate_shared::UserRecord

pub mod classify;
pub mod collaborators;
pub mod names;
pub mod overrides;
pub mod photo;
pub mod profile;
pub mod resolver;
pub mod status;
pub mod theme;
pub mod usernames;

pub use classify::{
    is_anonymous_placeholder, is_contact, is_deleted, is_reply_placeholder,
    is_reply_placeholder_id, is_self, is_service_account,
};
pub use collaborators::{
    InvisibleCharFilter, NameJoiner, PhoneFormatter, PlusPrefixFormatter, SpaceJoiner,
    StaticStrings, StringLookup, TextFilter,
};
pub use overrides::{OverrideChain, OverrideProvider, StaticOverrides, ThemeOverride};
pub use photo::{has_fallback_photo, has_photo, photo};
pub use profile::{ResolveOptions, ResolvedProfile};
pub use resolver::{AttributeResolver, AttributeResolverBuilder};
pub use status::{
    emoji_status_document_id, emoji_status_document_id_at, user_emoji_status_document_id,
    user_emoji_status_document_id_at,
};
pub use theme::bucketed_color_id;
pub use usernames::{has_public_username, public_username, public_username_with};
