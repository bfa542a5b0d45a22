//! # nameplate-inspect
//!
//! Developer tool that resolves every display attribute of one user record
//! and prints the result as JSON.
//!
//! ```text
//! NAMEPLATE_NOW=1700000000 nameplate-inspect record.json
//! ```
//!
//! See [`config::InspectConfig`] for the environment variables.

mod config;
mod error;
mod loader;

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::InspectConfig;
use crate::error::InspectError;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("info,nameplate_inspect=debug,nameplate_resolve=info")
            }),
        )
        .init();

    let record_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(InspectError::MissingRecordPath)?;

    let config = InspectConfig::from_env();
    info!(?config, "Loaded configuration");

    let resolver = loader::build_resolver(&config).context("Failed to set up resolver")?;
    let record = loader::load_record(&record_path).context("Failed to load user record")?;

    let now = config.now();
    let profile = resolver.resolve(Some(&record), now, config.options());
    info!(user_id = record.id, at = %now, "Resolved display attributes");

    let json = serde_json::to_string_pretty(&profile).context("Failed to serialize profile")?;
    println!("{json}");

    Ok(())
}
