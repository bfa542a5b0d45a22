//! Emoji status resolution.
//!
//! Timed statuses lapse silently: the same record yields a document id
//! before its expiry and `None` from the expiry second on. Callers that
//! render several fields of one record should use the `_at` variants with
//! a single `now`.

use chrono::{DateTime, Utc};
use nameplate_shared::{EmojiStatus, UserRecord};
use tracing::trace;

/// Document id of the status badge, read against the current wall clock.
pub fn emoji_status_document_id(status: Option<&EmojiStatus>) -> Option<i64> {
    emoji_status_document_id_at(status, Utc::now())
}

/// Document id of the status badge as of `now`. A timed status is valid
/// while its expiry is strictly after `now`, compared in whole seconds.
pub fn emoji_status_document_id_at(
    status: Option<&EmojiStatus>,
    now: DateTime<Utc>,
) -> Option<i64> {
    match *status? {
        EmojiStatus::None => None,
        EmojiStatus::Permanent { document_id } => Some(document_id),
        EmojiStatus::TimedUntil { document_id, until } => {
            if until > now.timestamp() {
                Some(document_id)
            } else {
                trace!(document_id, until, "Emoji status expired");
                None
            }
        }
    }
}

pub fn user_emoji_status_document_id(user: Option<&UserRecord>) -> Option<i64> {
    user_emoji_status_document_id_at(user, Utc::now())
}

pub fn user_emoji_status_document_id_at(
    user: Option<&UserRecord>,
    now: DateTime<Utc>,
) -> Option<i64> {
    emoji_status_document_id_at(user.map(|u| &u.emoji_status), now)
}
