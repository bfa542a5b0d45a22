use std::sync::Arc;

use nameplate_shared::constants::HIDDEN_NAME_KEY;
use tracing::debug;

use crate::collaborators::{
    InvisibleCharFilter, NameJoiner, PhoneFormatter, PlusPrefixFormatter, SpaceJoiner,
    StaticStrings, StringLookup, TextFilter,
};
use crate::overrides::{OverrideChain, OverrideProvider};

/// Computes display attributes for user records.
///
/// Holds only the injected collaborators; it keeps no per-user state and
/// can be shared freely between threads.
#[derive(Clone)]
pub struct AttributeResolver {
    pub(crate) strings: Arc<dyn StringLookup>,
    pub(crate) phone: Arc<dyn PhoneFormatter>,
    pub(crate) joiner: Arc<dyn NameJoiner>,
    pub(crate) filter: Arc<dyn TextFilter>,
    pub(crate) overrides: OverrideChain,
}

impl Default for AttributeResolver {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AttributeResolver {
    pub fn builder() -> AttributeResolverBuilder {
        AttributeResolverBuilder::default()
    }

    pub fn overrides(&self) -> &OverrideChain {
        &self.overrides
    }

    pub(crate) fn format_name(&self, first: Option<&str>, last: Option<&str>) -> String {
        self.joiner
            .join(first.unwrap_or_default(), last.unwrap_or_default())
    }

    /// The localized hidden-name placeholder, never empty.
    pub(crate) fn hidden_name(&self) -> String {
        let text = self.strings.lookup(HIDDEN_NAME_KEY);
        if text.is_empty() {
            debug!(key = HIDDEN_NAME_KEY, "String lookup returned empty text");
            return HIDDEN_NAME_KEY.to_string();
        }
        text
    }
}

impl std::fmt::Debug for AttributeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeResolver")
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AttributeResolver`]. Every collaborator not set falls back
/// to the plain default from [`crate::collaborators`].
#[derive(Default)]
pub struct AttributeResolverBuilder {
    strings: Option<Arc<dyn StringLookup>>,
    phone: Option<Arc<dyn PhoneFormatter>>,
    joiner: Option<Arc<dyn NameJoiner>>,
    filter: Option<Arc<dyn TextFilter>>,
    overrides: OverrideChain,
}

impl AttributeResolverBuilder {
    pub fn strings(mut self, strings: Arc<dyn StringLookup>) -> Self {
        self.strings = Some(strings);
        self
    }

    pub fn phone_formatter(mut self, phone: Arc<dyn PhoneFormatter>) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn name_joiner(mut self, joiner: Arc<dyn NameJoiner>) -> Self {
        self.joiner = Some(joiner);
        self
    }

    pub fn text_filter(mut self, filter: Arc<dyn TextFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Local and remote override providers, asked in that order.
    pub fn providers(
        mut self,
        local: Arc<dyn OverrideProvider>,
        remote: Arc<dyn OverrideProvider>,
    ) -> Self {
        self.overrides = OverrideChain::ranked(local, remote);
        self
    }

    pub fn overrides(mut self, overrides: OverrideChain) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn build(self) -> AttributeResolver {
        AttributeResolver {
            strings: self
                .strings
                .unwrap_or_else(|| Arc::new(StaticStrings::new())),
            phone: self.phone.unwrap_or_else(|| Arc::new(PlusPrefixFormatter)),
            joiner: self.joiner.unwrap_or_else(|| Arc::new(SpaceJoiner)),
            filter: self.filter.unwrap_or_else(|| Arc::new(InvisibleCharFilter)),
            overrides: self.overrides,
        }
    }
}
