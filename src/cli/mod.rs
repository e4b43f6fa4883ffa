//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for medsync using clap.
//! The CLI is a thin operational shell over the library: it drives one
//! refresh or transition cycle against a configured remote store, which is
//! what a mobile shell would do continuously.

pub mod commands;

use clap::{Parser, Subcommand};

/// medsync - Appointment synchronization core
#[derive(Parser, Debug)]
#[command(name = "medsync")]
#[command(version, about, long_about = None)]
#[command(author = "MedSync Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "medsync.toml", env = "MEDSYNC_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MEDSYNC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one refresh cycle and list upcoming appointments
    Refresh(commands::refresh::RefreshArgs),

    /// Cancel an upcoming appointment
    Cancel(commands::transition::CancelArgs),

    /// Mark an upcoming appointment as completed
    Complete(commands::transition::CompleteArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
