//! Reads the inspector inputs from disk and wires up a resolver.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use nameplate_resolve::{AttributeResolver, StaticOverrides, StaticStrings, ThemeOverride};
use nameplate_shared::UserRecord;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::InspectConfig;
use crate::error::{InspectError, Result};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|source| InspectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| InspectError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_record(path: &Path) -> Result<UserRecord> {
    let record: UserRecord = read_json(path)?;
    debug!(user_id = record.id, path = %path.display(), "Loaded user record");
    Ok(record)
}

fn load_strings(path: Option<&Path>) -> Result<StaticStrings> {
    match path {
        Some(path) => {
            let table: HashMap<String, String> = read_json(path)?;
            debug!(entries = table.len(), path = %path.display(), "Loaded string table");
            Ok(StaticStrings::from_map(table))
        }
        None => Ok(StaticStrings::new()),
    }
}

fn load_overrides(label: &str, path: Option<&Path>) -> Result<StaticOverrides> {
    match path {
        Some(path) => {
            let entries: HashMap<i64, ThemeOverride> = read_json(path)?;
            debug!(label, entries = entries.len(), path = %path.display(), "Loaded overrides");
            Ok(StaticOverrides::from_entries(label, entries))
        }
        None => Ok(StaticOverrides::new(label)),
    }
}

/// Build a resolver from the configured string and override tables.
pub fn build_resolver(config: &InspectConfig) -> Result<AttributeResolver> {
    let strings = load_strings(config.strings_path.as_deref())?;
    let local = load_overrides("local", config.local_overrides_path.as_deref())?;
    let remote = load_overrides("remote", config.remote_overrides_path.as_deref())?;

    Ok(AttributeResolver::builder()
        .strings(Arc::new(strings))
        .providers(Arc::new(local), Arc::new(remote))
        .build())
}
