/// Bot that stands in for the author of forwarded replies
pub const REPLY_BOT: i64 = 1_271_266_957;

/// Older reply placeholder account, still seen in cached history
pub const REPLY_BOT_LEGACY: i64 = 708_513;

/// Placeholder sender used for anonymous admins
pub const ANONYMOUS: i64 = 2_666_000;

/// Official notification and service accounts
pub const SERVICE_ACCOUNTS: [i64; 3] = [333_000, 777_000, 42_777];

/// Number of buckets for the identity-derived default name color
pub const COLOR_BUCKETS: i64 = 7;

/// Profile color id meaning "no profile color configured"
pub const NO_PROFILE_COLOR: i32 = -1;

/// Emoji id meaning "no decorative emoji"
pub const NO_EMOJI: i64 = 0;

/// Returned instead of a first name for deleted or unknown accounts
pub const DELETED_SENTINEL: &str = "DELETED";

/// Localization key for the hidden-name placeholder
pub const HIDDEN_NAME_KEY: &str = "HiddenName";

/// First names this short (in chars) are replaced by the full name
/// where a fuller label is required
pub const SHORT_NAME_MAX_CHARS: usize = 2;
