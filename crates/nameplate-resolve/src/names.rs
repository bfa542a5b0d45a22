//! Display-name resolution.

use nameplate_shared::constants::{DELETED_SENTINEL, SHORT_NAME_MAX_CHARS};
use nameplate_shared::UserRecord;

use crate::classify::is_deleted;
use crate::resolver::AttributeResolver;

pub(crate) fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|s| !s.is_empty())
}

/// Deleted-aware view of a record: `None` for missing or deleted users.
fn live(user: Option<&UserRecord>) -> Option<&UserRecord> {
    user.filter(|u| !is_deleted(Some(u)))
}

impl AttributeResolver {
    /// Full name, falling back to the formatted phone number and then to an
    /// empty string. Missing and deleted users get the hidden-name
    /// placeholder.
    pub fn display_name(&self, user: Option<&UserRecord>) -> String {
        let Some(user) = live(user) else {
            return self.hidden_name();
        };

        let formatted = self.format_name(user.first_name.as_deref(), user.last_name.as_deref());
        match non_empty(&user.phone) {
            Some(phone) if formatted.is_empty() => self.phone.format(&format!("+{phone}")),
            _ => formatted,
        }
    }

    /// First name (or last name if there is none), passed through the text
    /// filter.
    pub fn first_name(&self, user: Option<&UserRecord>) -> String {
        self.first_name_with(user, true)
    }

    /// Like [`Self::first_name`]. With `allow_short == false` a first name of
    /// two chars or fewer is replaced by the full joined name.
    pub fn first_name_with(&self, user: Option<&UserRecord>, allow_short: bool) -> String {
        let Some(user) = live(user) else {
            return DELETED_SENTINEL.to_string();
        };

        let name = match non_empty(&user.first_name) {
            Some(first) if !allow_short && first.chars().count() <= SHORT_NAME_MAX_CHARS => {
                return self.format_name(Some(first), user.last_name.as_deref());
            }
            Some(first) => Some(first),
            None => non_empty(&user.last_name),
        };

        match name {
            Some(name) => self.filter.filter(name),
            None => self.hidden_name(),
        }
    }

    /// First whitespace-delimited word of the first name (or last name),
    /// unfiltered. A name made only of whitespace counts as no name.
    pub fn forced_first_name(&self, user: Option<&UserRecord>) -> String {
        let Some(user) = live(user) else {
            return DELETED_SENTINEL.to_string();
        };

        non_empty(&user.first_name)
            .or_else(|| non_empty(&user.last_name))
            .and_then(|name| name.split_whitespace().next())
            .map_or_else(|| self.hidden_name(), String::from)
    }
}
