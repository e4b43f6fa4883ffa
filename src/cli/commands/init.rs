//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "medsync.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing medsync configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your remote store URL", self.output);
                println!("  2. Set MEDSYNC_REMOTE_API_KEY in your environment or .env file");
                println!("  3. Validate configuration: medsync validate-config");
                println!("  4. Run a refresh: medsync refresh --user <user-id>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Starter configuration content
    fn starter_config() -> &'static str {
        r#"# medsync configuration file
# Appointment synchronization core

[application]
log_level = "info"

[remote]
# Base URL of the remote store's REST surface
base_url = "http://localhost:54321/rest/v1"
# API key, usually injected from the environment
api_key = "${MEDSYNC_REMOTE_API_KEY}"
timeout_seconds = 30
tls_verify = true

[sync]
# Backoff before the single retry of a suspect empty fetch
empty_retry_delay_ms = 1200

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}
