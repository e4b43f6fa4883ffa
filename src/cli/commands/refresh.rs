//! Refresh command implementation
//!
//! This module implements the `refresh` command: sign in as the given user,
//! run one refresh cycle against the configured remote store, and print the
//! upcoming appointments.

use crate::adapters::store::{collections, RestStore};
use crate::config::load_config;
use crate::core::service::AppointmentService;
use crate::core::session::Session;
use crate::domain::UserId;
use clap::Args;
use std::sync::Arc;
use std::time::Duration;

/// Arguments for the refresh command
#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// User id to sync appointments for
    #[arg(short, long)]
    pub user: String,
}

impl RefreshArgs {
    /// Execute the refresh command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let user = match UserId::new(&self.user) {
            Ok(user) => user,
            Err(e) => {
                println!("❌ Invalid user id: {e}");
                return Ok(2);
            }
        };

        let service = match build_service(config_path).await? {
            Prepared::Ready(service) => service,
            Prepared::Exit(code) => return Ok(code),
        };

        service.session().sign_in(user);
        service.refresh().await;

        let upcoming = service.upcoming();
        println!();
        println!("📅 {} upcoming appointment(s)", upcoming.len());
        for appointment in &upcoming {
            let time = appointment
                .start_time
                .zip(appointment.effective_end_time())
                .map(|(start, end)| {
                    format!(" {}-{}", start.format("%H:%M"), end.format("%H:%M"))
                })
                .unwrap_or_default();
            println!(
                "   {}  {}{}  doctor={}  hospital={}",
                appointment.id,
                appointment.date,
                time,
                appointment.doctor_id,
                appointment.hospital_id
            );
        }

        Ok(0)
    }
}

/// Outcome of wiring the service for a CLI run
pub(super) enum Prepared {
    /// Service is ready to use
    Ready(AppointmentService),
    /// Wiring failed; exit with this code (the reason was already printed)
    Exit(i32),
}

/// Load configuration, check remote reachability, and wire the service
///
/// Shared by the refresh and transition commands.
pub(super) async fn build_service(config_path: &str) -> anyhow::Result<Prepared> {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to load configuration: {e}");
            return Ok(Prepared::Exit(2));
        }
    };

    let store = match RestStore::new(&config.remote) {
        Ok(s) => s,
        Err(e) => {
            println!("❌ Failed to build remote store gateway: {e}");
            return Ok(Prepared::Exit(2));
        }
    };

    if let Err(e) = store.health_check(collections::APPOINTMENTS).await {
        println!("🔌 Remote store unreachable: {e}");
        return Ok(Prepared::Exit(4));
    }

    Ok(Prepared::Ready(AppointmentService::new(
        Arc::new(store),
        Arc::new(Session::new()),
        Duration::from_millis(config.sync.empty_retry_delay_ms),
    )))
}
