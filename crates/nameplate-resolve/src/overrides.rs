//! Ranked theme overrides.
//!
//! A provider answers `None` when it has no opinion. `Some(0)` is a real
//! override and stops the search like any other value.

use std::collections::HashMap;
use std::sync::Arc;

use nameplate_shared::UserRecord;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A source of theme overrides ranked ahead of the record's own values.
pub trait OverrideProvider: Send + Sync {
    /// Short name used in logs.
    fn label(&self) -> &str;

    fn color_id(&self, user: &UserRecord) -> Option<i32> {
        let _ = user;
        None
    }

    fn emoji_id(&self, user: &UserRecord) -> Option<i64> {
        let _ = user;
        None
    }

    fn profile_color_id(&self, user: &UserRecord) -> Option<i32> {
        let _ = user;
        None
    }

    fn profile_emoji_id(&self, user: &UserRecord) -> Option<i64> {
        let _ = user;
        None
    }
}

/// Providers in the order they are asked.
#[derive(Clone, Default)]
pub struct OverrideChain {
    providers: Vec<Arc<dyn OverrideProvider>>,
}

impl OverrideChain {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Local provider first, then remote.
    pub fn ranked(local: Arc<dyn OverrideProvider>, remote: Arc<dyn OverrideProvider>) -> Self {
        Self {
            providers: vec![local, remote],
        }
    }

    /// Append a provider with the lowest rank so far.
    pub fn push(mut self, provider: Arc<dyn OverrideProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Ask each provider in rank order and return the first opinion.
    pub fn first_opinion<T, F>(&self, user: &UserRecord, field: &'static str, ask: F) -> Option<T>
    where
        F: Fn(&dyn OverrideProvider, &UserRecord) -> Option<T>,
    {
        self.providers.iter().find_map(|provider| {
            let answer = ask(provider.as_ref(), user);
            if answer.is_some() {
                trace!(
                    user_id = user.id,
                    provider = provider.label(),
                    field,
                    "Theme override applied"
                );
            }
            answer
        })
    }
}

impl std::fmt::Debug for OverrideChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|p| p.label()))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Table-backed provider
// ---------------------------------------------------------------------------

/// Per-user override values. Unset fields mean "no opinion".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverride {
    pub color_id: Option<i32>,
    pub emoji_id: Option<i64>,
    pub profile_color_id: Option<i32>,
    pub profile_emoji_id: Option<i64>,
}

/// Override provider backed by an in-memory table keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct StaticOverrides {
    label: String,
    entries: HashMap<i64, ThemeOverride>,
}

impl StaticOverrides {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: HashMap::new(),
        }
    }

    pub fn from_entries(label: impl Into<String>, entries: HashMap<i64, ThemeOverride>) -> Self {
        Self {
            label: label.into(),
            entries,
        }
    }

    pub fn with(mut self, user_id: i64, entry: ThemeOverride) -> Self {
        self.entries.insert(user_id, entry);
        self
    }

    fn entry(&self, user: &UserRecord) -> Option<&ThemeOverride> {
        self.entries.get(&user.id)
    }
}

impl OverrideProvider for StaticOverrides {
    fn label(&self) -> &str {
        &self.label
    }

    fn color_id(&self, user: &UserRecord) -> Option<i32> {
        self.entry(user)?.color_id
    }

    fn emoji_id(&self, user: &UserRecord) -> Option<i64> {
        self.entry(user)?.emoji_id
    }

    fn profile_color_id(&self, user: &UserRecord) -> Option<i32> {
        self.entry(user)?.profile_color_id
    }

    fn profile_emoji_id(&self, user: &UserRecord) -> Option<i64> {
        self.entry(user)?.profile_emoji_id
    }
}
