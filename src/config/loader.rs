//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MedSyncConfig;
use crate::config::secret_string;
use crate::domain::errors::MedSyncError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MedSyncConfig
/// 4. Applies environment variable overrides (MEDSYNC_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use medsync::config::loader::load_config;
///
/// let config = load_config("medsync.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MedSyncConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MedSyncError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MedSyncError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: MedSyncConfig = toml::from_str(&contents)
        .map_err(|e| MedSyncError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        MedSyncError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static pattern");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MedSyncError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the MEDSYNC_* prefix
///
/// Environment variables follow the pattern: MEDSYNC_<SECTION>_<KEY>
/// For example: MEDSYNC_REMOTE_BASE_URL, MEDSYNC_REMOTE_API_KEY
fn apply_env_overrides(config: &mut MedSyncConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("MEDSYNC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Remote store overrides
    if let Ok(val) = std::env::var("MEDSYNC_REMOTE_BASE_URL") {
        config.remote.base_url = val;
    }
    if let Ok(val) = std::env::var("MEDSYNC_REMOTE_API_KEY") {
        config.remote.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("MEDSYNC_REMOTE_TIMEOUT_SECONDS") {
        if let Ok(seconds) = val.parse() {
            config.remote.timeout_seconds = seconds;
        }
    }
    if let Ok(val) = std::env::var("MEDSYNC_REMOTE_TLS_VERIFY") {
        config.remote.tls_verify = val.parse().unwrap_or(true);
    }

    // Sync overrides
    if let Ok(val) = std::env::var("MEDSYNC_SYNC_EMPTY_RETRY_DELAY_MS") {
        if let Ok(delay) = val.parse() {
            config.sync.empty_retry_delay_ms = delay;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MEDSYNC_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("MEDSYNC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
