//! Command-line argument parsing
//!
//! Flags override the values loaded from `config.yaml` for this run only.

use clap::Parser;

use crate::config::EditorConfig;

/// Terminal editor for shipping-cost tables
#[derive(Parser, Debug, Default)]
#[command(
    name = "costgrid",
    version,
    about = "Edit a shipping-cost table stored behind a REST API"
)]
pub struct CliArgs {
    /// Base URL of the remote store (the table lives at <URL>/data)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// How long status messages stay visible, in milliseconds
    #[arg(long, value_name = "MS")]
    pub status_ms: Option<u64>,

    /// Request timeout for remote calls, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Start with an empty table instead of fetching
    #[arg(long)]
    pub no_fetch: bool,

    /// Write the effective settings (config file plus these flags) back to config.yaml
    #[arg(long)]
    pub save_config: bool,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub editor: EditorConfig,
    /// Issue the initial `GET /data` on startup
    pub fetch_on_start: bool,
    /// Persist `editor` before starting
    pub save_config: bool,
}

impl CliArgs {
    /// Layer CLI overrides on top of a loaded config
    pub fn into_config(self, mut editor: EditorConfig) -> Result<StartupConfig, String> {
        if let Some(url) = self.api_url {
            if url.trim().is_empty() {
                return Err("--api-url cannot be empty".to_string());
            }
            editor.api_base_url = url;
        }
        if let Some(ms) = self.status_ms {
            editor.status_message_ms = ms;
        }
        if let Some(secs) = self.timeout {
            if secs == 0 {
                return Err("--timeout must be at least 1 second".to_string());
            }
            editor.request_timeout_secs = secs;
        }

        Ok(StartupConfig {
            editor,
            fetch_on_start: !self.no_fetch,
            save_config: self.save_config,
        })
    }
}
