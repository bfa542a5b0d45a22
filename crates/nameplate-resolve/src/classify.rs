//! Predicates that categorize a user record.
//!
//! All of them accept a missing record and never fail. A missing record
//! counts as deleted and as nothing else.

use nameplate_shared::constants::{ANONYMOUS, REPLY_BOT, REPLY_BOT_LEGACY, SERVICE_ACCOUNTS};
use nameplate_shared::UserRecord;

pub fn is_deleted(user: Option<&UserRecord>) -> bool {
    user.map_or(true, |u| u.deleted)
}

/// Saved contact, either one-way or mutual.
pub fn is_contact(user: Option<&UserRecord>) -> bool {
    user.is_some_and(|u| u.contact || u.mutual_contact)
}

pub fn is_self(user: Option<&UserRecord>) -> bool {
    user.is_some_and(|u| u.is_self)
}

/// Whether `id` is one of the accounts that author forwarded replies.
pub fn is_reply_placeholder_id(id: i64) -> bool {
    id == REPLY_BOT || id == REPLY_BOT_LEGACY
}

pub fn is_reply_placeholder(user: Option<&UserRecord>) -> bool {
    user.is_some_and(|u| is_reply_placeholder_id(u.id))
}

pub fn is_anonymous_placeholder(user: Option<&UserRecord>) -> bool {
    user.is_some_and(|u| u.id == ANONYMOUS)
}

/// Official notification/service accounts.
pub fn is_service_account(id: i64) -> bool {
    SERVICE_ACCOUNTS.contains(&id)
}
