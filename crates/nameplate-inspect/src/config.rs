//! Inspector configuration loaded from environment variables.
//!
//! Every setting is optional; with nothing set the inspector resolves
//! against the built-in strings, no overrides and the current time.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use nameplate_resolve::ResolveOptions;

use crate::error::{InspectError, Result};

#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// JSON object of localized strings by key.
    /// Env: `NAMEPLATE_STRINGS`
    /// Default: none (built-in English fallbacks).
    pub strings_path: Option<PathBuf>,

    /// JSON table of per-user overrides, asked first.
    /// Env: `NAMEPLATE_LOCAL_OVERRIDES`
    pub local_overrides_path: Option<PathBuf>,

    /// JSON table of per-user overrides, asked after the local table.
    /// Env: `NAMEPLATE_REMOTE_OVERRIDES`
    pub remote_overrides_path: Option<PathBuf>,

    /// Resolution instant, in epoch seconds.
    /// Env: `NAMEPLATE_NOW`
    /// Default: wall clock at startup.
    pub now: Option<DateTime<Utc>>,

    /// Env: `NAMEPLATE_ALLOW_SHORT` (true/false)
    /// Default: `true`
    pub allow_short: bool,

    /// Env: `NAMEPLATE_PREFER_EDITABLE` (true/false)
    /// Default: `false`
    pub prefer_editable: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            strings_path: None,
            local_overrides_path: None,
            remote_overrides_path: None,
            now: None,
            allow_short: true,
            prefer_editable: false,
        }
    }
}

impl InspectConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| var(key).filter(|p| !p.is_empty()).map(PathBuf::from);

        let mut config = Self {
            strings_path: path("NAMEPLATE_STRINGS"),
            local_overrides_path: path("NAMEPLATE_LOCAL_OVERRIDES"),
            remote_overrides_path: path("NAMEPLATE_REMOTE_OVERRIDES"),
            ..Self::default()
        };

        if let Some(val) = var("NAMEPLATE_NOW") {
            match parse_epoch_secs(&val) {
                Ok(now) => config.now = Some(now),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Ignoring NAMEPLATE_NOW, using wall clock"
                    );
                }
            }
        }

        if let Some(val) = var("NAMEPLATE_ALLOW_SHORT") {
            config.allow_short = parse_flag(&val);
        }

        if let Some(val) = var("NAMEPLATE_PREFER_EDITABLE") {
            config.prefer_editable = parse_flag(&val);
        }

        config
    }

    pub fn options(&self) -> ResolveOptions {
        ResolveOptions {
            allow_short: self.allow_short,
            prefer_editable: self.prefer_editable,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

fn parse_flag(val: &str) -> bool {
    val != "false" && val != "0"
}

fn parse_epoch_secs(val: &str) -> Result<DateTime<Utc>> {
    let secs: i64 = val
        .trim()
        .parse()
        .map_err(|e| InspectError::InvalidNow(format!("{val:?} is not an integer: {e}")))?;
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| InspectError::InvalidNow(format!("{secs} is out of range")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = InspectConfig::from_lookup(lookup(&[]));
        assert!(config.strings_path.is_none());
        assert!(config.now.is_none());
        assert_eq!(config.options(), ResolveOptions::default());
    }

    #[test]
    fn test_config_from_vars() {
        let config = InspectConfig::from_lookup(lookup(&[
            ("NAMEPLATE_STRINGS", "/tmp/strings.json"),
            ("NAMEPLATE_REMOTE_OVERRIDES", "remote.json"),
            ("NAMEPLATE_NOW", "1700000000"),
            ("NAMEPLATE_ALLOW_SHORT", "false"),
            ("NAMEPLATE_PREFER_EDITABLE", "1"),
        ]));
        assert_eq!(config.strings_path, Some(PathBuf::from("/tmp/strings.json")));
        assert!(config.local_overrides_path.is_none());
        assert_eq!(config.remote_overrides_path, Some(PathBuf::from("remote.json")));
        assert_eq!(config.now().timestamp(), 1_700_000_000);
        assert!(!config.allow_short);
        assert!(config.prefer_editable);
    }

    #[test]
    fn test_invalid_now_is_ignored() {
        let config = InspectConfig::from_lookup(lookup(&[("NAMEPLATE_NOW", "soon")]));
        assert!(config.now.is_none());
    }

    #[test]
    fn test_parse_epoch_secs() {
        assert_eq!(parse_epoch_secs(" 42 ").unwrap().timestamp(), 42);
        assert!(matches!(parse_epoch_secs("4.2"), Err(InspectError::InvalidNow(_))));
        assert!(matches!(
            parse_epoch_secs(&i64::MAX.to_string()),
            Err(InspectError::InvalidNow(_))
        ));
    }
}
