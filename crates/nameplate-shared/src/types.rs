use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A secondary handle attached to an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsernameEntry {
    pub username: String,
    pub active: bool,
    pub editable: bool,
}

impl UsernameEntry {
    pub fn new(username: impl Into<String>, active: bool, editable: bool) -> Self {
        Self {
            username: username.into(),
            active,
            editable,
        }
    }
}

/// Server-side reference to an uploaded photo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRef {
    pub photo_id: i64,
    pub dc_id: i32,
    #[serde(default)]
    pub has_video: bool,
}

/// A photo slot. `Empty` is an explicit "no photo" marker sent by the
/// server and must not be confused with a missing slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ProfilePhoto {
    Empty,
    Set(PhotoRef),
}

impl ProfilePhoto {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn photo_ref(&self) -> Option<&PhotoRef> {
        match self {
            Self::Set(photo) => Some(photo),
            Self::Empty => None,
        }
    }
}

/// Decorative status badge shown next to a name.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EmojiStatus {
    #[default]
    None,
    Permanent {
        document_id: i64,
    },
    /// Valid while `until` (epoch seconds) is strictly in the future.
    TimedUntil {
        document_id: i64,
        until: i64,
    },
}

/// Theme color settings carried by the record itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PeerColor {
    pub has_color: bool,
    pub color: i32,
    pub has_emoji: bool,
    pub background_emoji_id: i64,
}

impl PeerColor {
    pub fn with_color(color: i32) -> Self {
        Self {
            has_color: true,
            color,
            ..Self::default()
        }
    }

    pub fn with_emoji(background_emoji_id: i64) -> Self {
        Self {
            has_emoji: true,
            background_emoji_id,
            ..Self::default()
        }
    }

    /// The color index, if the color flag is set.
    pub fn color_index(&self) -> Option<i32> {
        self.has_color.then_some(self.color)
    }

    /// The background emoji id, if the emoji flag is set.
    pub fn emoji_id(&self) -> Option<i64> {
        self.has_emoji.then_some(self.background_emoji_id)
    }
}

/// Wire-level tag some older record layers attach instead of setting flags.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordVariant {
    #[default]
    Current,
    LegacyDeleted,
    LegacySelf,
    LegacyContact,
}

/// Immutable snapshot of everything known about one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub username: Option<String>,
    pub usernames: Vec<UsernameEntry>,
    pub deleted: bool,
    pub contact: bool,
    pub mutual_contact: bool,
    #[serde(rename = "self")]
    pub is_self: bool,
    pub photo: Option<ProfilePhoto>,
    pub emoji_status: EmojiStatus,
    pub color: Option<PeerColor>,
    pub profile_color: Option<PeerColor>,
}

impl UserRecord {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Fold a legacy variant tag into the boolean flags so that nothing
    /// downstream has to know about variants.
    pub fn normalized(mut self, variant: RecordVariant) -> Self {
        match variant {
            RecordVariant::Current => {}
            RecordVariant::LegacyDeleted => self.deleted = true,
            RecordVariant::LegacySelf => self.is_self = true,
            RecordVariant::LegacyContact => self.contact = true,
        }
        self
    }

    /// Expiry instant of a timed emoji status.
    pub fn emoji_status_expiry(&self) -> Option<DateTime<Utc>> {
        match self.emoji_status {
            EmojiStatus::TimedUntil { until, .. } => DateTime::from_timestamp(until, 0),
            _ => None,
        }
    }
}

/// Extended profile data fetched separately from the base record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserFullRecord {
    pub id: i64,
    pub fallback_photo: Option<ProfilePhoto>,
}
