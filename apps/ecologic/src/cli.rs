//! # Process Configuration
//!
//! Command-line arguments and environment for the EcoLogic client.
//!
//! The text-generation credential is read from `GEMINI_API_KEY`; its
//! absence is a normal path that selects the local fallback facts.

use clap::Parser;
use std::path::PathBuf;

/// Default interval between pet decay ticks, in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 5000;

/// EcoLogic - gamified environmental education, in your terminal.
#[derive(Debug, Parser)]
#[command(name = "ecologic", version, about)]
pub struct Config {
    /// Directory holding the durable client store.
    #[arg(long, env = "ECOLOGIC_DATA_DIR", default_value = ".ecologic")]
    pub data_dir: PathBuf,

    /// Override the saved language preference (en, hi, bn, te).
    #[arg(long)]
    pub language: Option<String>,

    /// Pet decay tick interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    pub tick_interval_ms: u64,

    /// Credential for the fact-of-the-day request. Missing is fine;
    /// the client falls back to the local fact set.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl Config {
    /// Path of the redb client store inside the data directory.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("client.redb")
    }
}
