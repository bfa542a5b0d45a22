//! One consistent snapshot of every derived attribute of a record.

use chrono::{DateTime, Utc};
use nameplate_shared::UserRecord;
use serde::{Deserialize, Serialize};

use crate::classify;
use crate::photo::has_photo;
use crate::resolver::AttributeResolver;
use crate::status::user_emoji_status_document_id_at;
use crate::usernames::public_username_with;

/// How the caller wants the name and handle fields resolved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    pub allow_short: bool,
    pub prefer_editable: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            allow_short: true,
            prefer_editable: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProfile {
    pub id: Option<i64>,
    pub resolved_at: DateTime<Utc>,

    pub deleted: bool,
    pub contact: bool,
    #[serde(rename = "self")]
    pub is_self: bool,
    pub reply_placeholder: bool,
    pub anonymous_placeholder: bool,
    pub service_account: bool,

    pub display_name: String,
    pub first_name: String,
    pub forced_first_name: String,
    pub public_username: Option<String>,

    pub has_photo: bool,
    pub emoji_status_document_id: Option<i64>,

    pub color_id: i32,
    pub emoji_id: i64,
    pub profile_color_id: i32,
    pub profile_emoji_id: i64,
}

impl AttributeResolver {
    /// Resolve everything against one instant.
    pub fn resolve(
        &self,
        user: Option<&UserRecord>,
        now: DateTime<Utc>,
        options: ResolveOptions,
    ) -> ResolvedProfile {
        ResolvedProfile {
            id: user.map(|u| u.id),
            resolved_at: now,

            deleted: classify::is_deleted(user),
            contact: classify::is_contact(user),
            is_self: classify::is_self(user),
            reply_placeholder: classify::is_reply_placeholder(user),
            anonymous_placeholder: classify::is_anonymous_placeholder(user),
            service_account: user.is_some_and(|u| classify::is_service_account(u.id)),

            display_name: self.display_name(user),
            first_name: self.first_name_with(user, options.allow_short),
            forced_first_name: self.forced_first_name(user),
            public_username: public_username_with(user, options.prefer_editable)
                .map(String::from),

            has_photo: has_photo(user),
            emoji_status_document_id: user_emoji_status_document_id_at(user, now),

            color_id: self.color_id(user),
            emoji_id: self.emoji_id(user),
            profile_color_id: self.profile_color_id(user),
            profile_emoji_id: self.profile_emoji_id(user),
        }
    }

    /// [`Self::resolve`] at the current wall-clock time.
    pub fn resolve_now(
        &self,
        user: Option<&UserRecord>,
        options: ResolveOptions,
    ) -> ResolvedProfile {
        self.resolve(user, Utc::now(), options)
    }
}
