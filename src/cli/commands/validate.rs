//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the medsync configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        // load_config already validated; re-run for the summary path
        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Remote Store: {}", config.remote.base_url);
                println!(
                    "  API Key: {}",
                    if config.remote.api_key.is_some() {
                        "configured"
                    } else {
                        "not configured"
                    }
                );
                println!("  Request Timeout: {}s", config.remote.timeout_seconds);
                println!("  TLS Verify: {}", config.remote.tls_verify);
                println!(
                    "  Empty-Retry Delay: {}ms",
                    config.sync.empty_retry_delay_ms
                );
                println!("  File Logging: {}", config.logging.local_enabled);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }
}
