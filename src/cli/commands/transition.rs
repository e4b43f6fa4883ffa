//! Cancel and complete command implementations
//!
//! Both commands run a refresh first so the transition targets a record the
//! client actually knows about, apply the status transition, and print the
//! record's resulting state.

use super::refresh::{build_service, Prepared};
use crate::domain::{AppointmentId, AppointmentStatus, UserId};
use clap::Args;

/// Arguments for the cancel command
#[derive(Args, Debug)]
pub struct CancelArgs {
    /// User id the appointment belongs to
    #[arg(short, long)]
    pub user: String,

    /// Appointment id to cancel
    pub appointment_id: String,
}

impl CancelArgs {
    /// Execute the cancel command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        run_transition(
            config_path,
            &self.user,
            &self.appointment_id,
            AppointmentStatus::Cancelled,
        )
        .await
    }
}

/// Arguments for the complete command
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// User id the appointment belongs to
    #[arg(short, long)]
    pub user: String,

    /// Appointment id to mark completed
    pub appointment_id: String,
}

impl CompleteArgs {
    /// Execute the complete command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        run_transition(
            config_path,
            &self.user,
            &self.appointment_id,
            AppointmentStatus::Completed,
        )
        .await
    }
}

async fn run_transition(
    config_path: &str,
    user: &str,
    appointment_id: &str,
    target: AppointmentStatus,
) -> anyhow::Result<i32> {
    let user = match UserId::new(user) {
        Ok(user) => user,
        Err(e) => {
            println!("❌ Invalid user id: {e}");
            return Ok(2);
        }
    };
    let id = match AppointmentId::new(appointment_id) {
        Ok(id) => id,
        Err(e) => {
            println!("❌ Invalid appointment id: {e}");
            return Ok(2);
        }
    };

    let service = match build_service(config_path).await? {
        Prepared::Ready(service) => service,
        Prepared::Exit(code) => return Ok(code),
    };

    service.session().sign_in(user);
    service.refresh().await;

    let Some(before) = service.store().get(&id) else {
        println!("❓ Appointment {id} is not known for this user");
        return Ok(1);
    };

    match target {
        AppointmentStatus::Cancelled => service.cancel(&id).await,
        AppointmentStatus::Completed => service.complete(&id).await,
        AppointmentStatus::Upcoming => unreachable!("never a transition target"),
    }

    // The optimistic state is what the UI would show
    match service.store().get(&id) {
        Some(after) if after.status == target => {
            println!("✅ Appointment {id} is now {}", after.status);
            Ok(0)
        }
        Some(after) => {
            println!(
                "ℹ️  Appointment {id} is {} (was {}); no transition applied",
                after.status, before.status
            );
            Ok(0)
        }
        None => {
            // A post-transition refresh may have dropped the record
            println!("ℹ️  Appointment {id} no longer present after refresh");
            Ok(0)
        }
    }
}
