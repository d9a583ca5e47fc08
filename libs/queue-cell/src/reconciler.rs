//! Fan-out/fan-in of per-appointment queue position fetches. Requests are
//! dispatched together and awaited collectively so a slow center does not
//! serialize behind another, and a failing one degrades to a missing map
//! entry instead of failing the batch.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use futures::future::join_all;
use tracing::{debug, warn};

use appointment_cell::AppointmentRepository;
use shared_models::{Appointment, AppointmentStatus, QueuePosition};

use crate::eligibility::is_today;

/// Appointments whose queue state is worth asking the backend about:
/// in-queue statuses (plus `scheduled` where the view wants check-in
/// candidates shown) dated today. Stale queue data for past or future days
/// must never be requested or displayed.
fn is_pollable(appointment: &Appointment, include_scheduled: bool, now: NaiveDateTime) -> bool {
    let status_active = appointment.status.is_in_queue()
        || (include_scheduled && appointment.status == AppointmentStatus::Scheduled);
    status_active && is_today(&appointment.appointment_date, now.date())
}

/// Build the id -> position map for one polling pass. The result replaces
/// the previous map wholesale; ids whose fetch failed are simply absent.
pub async fn reconcile(
    repo: &dyn AppointmentRepository,
    appointments: &[Appointment],
    include_scheduled: bool,
    now: NaiveDateTime,
) -> HashMap<i64, QueuePosition> {
    let active_ids: Vec<i64> = appointments
        .iter()
        .filter(|a| is_pollable(a, include_scheduled, now))
        .map(|a| a.id)
        .collect();

    if active_ids.is_empty() {
        return HashMap::new();
    }

    debug!("Reconciling queue state for {} appointments", active_ids.len());

    let fetches = active_ids
        .iter()
        .map(|&id| async move { (id, repo.queue_position(id).await) });

    let mut queue = HashMap::with_capacity(active_ids.len());
    for (id, result) in join_all(fetches).await {
        match result {
            Ok(position) => {
                queue.insert(id, position);
            }
            Err(e) => {
                // Isolated per-card degradation; the rest of the list stands
                warn!("Queue position fetch failed for appointment {}: {}", id, e);
            }
        }
    }

    queue
}
