//! Public handle lookup.

use nameplate_shared::UserRecord;

use crate::names::non_empty;

/// The handle to show for a user: the primary username if set, otherwise
/// the first active secondary handle.
pub fn public_username(user: Option<&UserRecord>) -> Option<&str> {
    public_username_with(user, false)
}

/// Like [`public_username`]. With `prefer_editable` only editable
/// secondary handles qualify; without it active ones do too.
pub fn public_username_with(user: Option<&UserRecord>, prefer_editable: bool) -> Option<&str> {
    let user = user?;
    if let Some(primary) = non_empty(&user.username) {
        return Some(primary);
    }

    user.usernames
        .iter()
        .find(|entry| {
            !entry.username.is_empty()
                && ((entry.active && !prefer_editable) || entry.editable)
        })
        .map(|entry| entry.username.as_str())
}

/// Whether `candidate` names this user, ignoring case. Matches the primary
/// username or any active secondary handle. `None` if either input is
/// missing.
pub fn has_public_username(user: Option<&UserRecord>, candidate: Option<&str>) -> Option<bool> {
    let (user, candidate) = (user?, candidate?);

    if user
        .username
        .as_deref()
        .is_some_and(|primary| eq_fold(primary, candidate))
    {
        return Some(true);
    }

    Some(
        user.usernames
            .iter()
            .any(|entry| entry.active && eq_fold(&entry.username, candidate)),
    )
}

/// Case-insensitive, locale-independent comparison. ASCII letters fold as
/// in `eq_ignore_ascii_case`; other chars compare by their full Unicode
/// lowercase mapping, so `"İ"` matches `"i\u{307}"` but not `"i"`.
fn eq_fold(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}
