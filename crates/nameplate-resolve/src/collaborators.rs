//! Capabilities the resolver borrows from the surrounding application,
//! plus plain default implementations of each.
//!
//! None of these may fail: a lookup miss, an odd phone string or a name
//! full of control characters all still produce a string.

use std::collections::HashMap;

use nameplate_shared::constants::HIDDEN_NAME_KEY;
use serde::{Deserialize, Serialize};

/// Localized UI strings by key.
pub trait StringLookup: Send + Sync {
    fn lookup(&self, key: &str) -> String;
}

/// Formats an international phone number (input already carries the `+`).
pub trait PhoneFormatter: Send + Sync {
    fn format(&self, phone: &str) -> String;
}

/// Joins first and last name into one display label.
pub trait NameJoiner: Send + Sync {
    fn join(&self, first: &str, last: &str) -> String;
}

/// Strips characters that can be used to spoof a name.
/// Must be idempotent.
pub trait TextFilter: Send + Sync {
    fn filter(&self, text: &str) -> String;
}

impl<F> StringLookup for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn lookup(&self, key: &str) -> String {
        self(key)
    }
}

impl<F> PhoneFormatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format(&self, phone: &str) -> String {
        self(phone)
    }
}

impl<F> NameJoiner for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn join(&self, first: &str, last: &str) -> String {
        self(first, last)
    }
}

impl<F> TextFilter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn filter(&self, text: &str) -> String {
        self(text)
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Key/value string table with English fallbacks for the keys the
/// resolver itself uses. Unknown keys resolve to the key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticStrings {
    table: HashMap<String, String>,
}

impl StaticStrings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.table.insert(key.into(), text.into());
        self
    }

    fn builtin(key: &str) -> Option<&'static str> {
        match key {
            HIDDEN_NAME_KEY => Some("Deleted Account"),
            _ => None,
        }
    }
}

impl StringLookup for StaticStrings {
    fn lookup(&self, key: &str) -> String {
        match self.table.get(key) {
            Some(text) if !text.is_empty() => text.clone(),
            _ => Self::builtin(key).unwrap_or(key).to_string(),
        }
    }
}

/// Leaves the number as-is apart from trimming whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlusPrefixFormatter;

impl PhoneFormatter for PlusPrefixFormatter {
    fn format(&self, phone: &str) -> String {
        phone.trim().to_string()
    }
}

/// Trims both parts and joins the non-empty ones with one space.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceJoiner;

impl NameJoiner for SpaceJoiner {
    fn join(&self, first: &str, last: &str) -> String {
        match (first.trim(), last.trim()) {
            ("", "") => String::new(),
            (first, "") => first.to_string(),
            ("", last) => last.to_string(),
            (first, last) => format!("{first} {last}"),
        }
    }
}

/// Removes zero-width, bidi-control and combining characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvisibleCharFilter;

impl InvisibleCharFilter {
    fn is_invisible(c: char) -> bool {
        matches!(
            c,
            '\u{0300}'..='\u{036F}'
                | '\u{200B}'..='\u{200F}'
                | '\u{202A}'..='\u{202E}'
                | '\u{2060}'..='\u{2064}'
                | '\u{FEFF}'
        )
    }
}

impl TextFilter for InvisibleCharFilter {
    fn filter(&self, text: &str) -> String {
        text.chars().filter(|c| !Self::is_invisible(*c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_strings_fallbacks() {
        let strings = StaticStrings::new().with("Greeting", "Hello");
        assert_eq!(strings.lookup("Greeting"), "Hello");
        assert_eq!(strings.lookup(HIDDEN_NAME_KEY), "Deleted Account");
        assert_eq!(strings.lookup("Unknown"), "Unknown");

        let strings = StaticStrings::new().with(HIDDEN_NAME_KEY, "Compte supprimé");
        assert_eq!(strings.lookup(HIDDEN_NAME_KEY), "Compte supprimé");
    }

    #[test]
    fn test_static_strings_empty_entry_uses_fallback() {
        let strings = StaticStrings::new().with(HIDDEN_NAME_KEY, "");
        assert_eq!(strings.lookup(HIDDEN_NAME_KEY), "Deleted Account");
    }

    #[test]
    fn test_static_strings_from_json() {
        let strings: StaticStrings =
            serde_json::from_str(r#"{"HiddenName": "Gelöschtes Konto"}"#).unwrap();
        assert_eq!(strings.lookup(HIDDEN_NAME_KEY), "Gelöschtes Konto");
    }

    #[test]
    fn test_space_joiner() {
        assert_eq!(SpaceJoiner.join("Ada", "Lovelace"), "Ada Lovelace");
        assert_eq!(SpaceJoiner.join(" Ada ", ""), "Ada");
        assert_eq!(SpaceJoiner.join("", "Lovelace"), "Lovelace");
        assert_eq!(SpaceJoiner.join("  ", " "), "");
    }

    #[test]
    fn test_invisible_filter_is_idempotent() {
        let spoofed = "Ad\u{200B}a\u{0301}\u{202E}";
        let once = InvisibleCharFilter.filter(spoofed);
        assert_eq!(once, "Ada");
        assert_eq!(InvisibleCharFilter.filter(&once), once);
    }

    #[test]
    fn test_closures_implement_contracts() {
        let upper = |s: &str| s.to_uppercase();
        assert_eq!(TextFilter::filter(&upper, "ada"), "ADA");
        assert_eq!(PhoneFormatter::format(&upper, "+1x"), "+1X");

        let joiner = |a: &str, b: &str| format!("{b}, {a}");
        assert_eq!(joiner.join("Ada", "Lovelace"), "Lovelace, Ada");
    }
}
