//! Owner of the queue view's state. All snapshot mutation happens through
//! `&mut self` here; the rendering layer only reads. Refreshes follow
//! stale-while-revalidate: a failed background pass leaves the last good
//! snapshot visible and surfaces a dismissible notice instead.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use appointment_cell::AppointmentRepository;
use shared_models::{ApiError, Appointment, CheckInResponse};

use crate::eligibility::{can_cancel, can_check_in};
use crate::models::{QueueSnapshot, ViewState};
use crate::reconciler::reconcile;

pub struct QueueViewController {
    repo: Arc<dyn AppointmentRepository>,
    include_scheduled: bool,
    state: ViewState,
    snapshot: Option<QueueSnapshot>,
    refreshing: bool,
    /// Monotonic pass counter; results from a superseded pass are discarded.
    pass_seq: u64,
    last_error: Option<String>,
}

impl QueueViewController {
    pub fn new(repo: Arc<dyn AppointmentRepository>, include_scheduled: bool) -> Self {
        Self {
            repo,
            include_scheduled,
            state: ViewState::Idle,
            snapshot: None,
            refreshing: false,
            pass_seq: 0,
            last_error: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&QueueSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Notice from the most recent failed background refresh or action.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Initial load. Until this succeeds once there is nothing to keep
    /// visible, so a failure here is a blocking `Error` state.
    pub async fn load(&mut self) -> &ViewState {
        self.state = ViewState::Loading;
        let seq = self.begin_pass();
        let now = Local::now().naive_local();

        match self.run_pass(now).await {
            Ok(snapshot) if self.is_current_pass(seq) => {
                info!(
                    "Loaded {} appointments ({} with live queue state)",
                    snapshot.appointments.len(),
                    snapshot.queue.len()
                );
                self.snapshot = Some(snapshot);
                self.state = ViewState::Ready;
                self.last_error = None;
            }
            Ok(_) => debug!("Discarding results from superseded load pass"),
            Err(e) => {
                warn!("Initial load failed: {}", e);
                self.state = ViewState::Error(e.to_string());
            }
        }

        &self.state
    }

    /// Manual or timer-triggered refresh. Re-entrant calls are ignored while
    /// a pass is in flight; without a previous snapshot this is just a load.
    pub async fn refresh(&mut self) {
        if self.refreshing {
            debug!("Refresh already in flight, ignoring trigger");
            return;
        }
        if self.snapshot.is_none() {
            self.load().await;
            return;
        }

        self.refreshing = true;
        let seq = self.begin_pass();
        let now = Local::now().naive_local();

        match self.run_pass(now).await {
            Ok(snapshot) if self.is_current_pass(seq) => {
                self.snapshot = Some(snapshot);
                self.state = ViewState::Ready;
                self.last_error = None;
            }
            Ok(_) => debug!("Discarding results from superseded refresh pass"),
            Err(e) => {
                // Keep the stale snapshot visible; the failure is a notice
                warn!("Background refresh failed: {}", e);
                self.last_error = Some(e.to_string());
            }
        }

        self.refreshing = false;
    }

    /// Cancel an appointment. Gated client-side; on success the whole list
    /// is refetched rather than patched, because one cancellation can shift
    /// other appointments' queue positions.
    pub async fn cancel(&mut self, appointment_id: i64) -> Result<(), ApiError> {
        let appointment = self.find(appointment_id)?;
        if !can_cancel(appointment) {
            return Err(ApiError::Domain(format!(
                "Appointment {} cannot be cancelled in status {}",
                appointment.ticket_number, appointment.status
            )));
        }

        self.repo.cancel(appointment_id).await?;
        info!("Cancelled appointment {}", appointment_id);
        self.refresh().await;
        Ok(())
    }

    /// Check in for a same-day appointment. Date/status violations are
    /// rejected here without any network call.
    pub async fn check_in(&mut self, appointment_id: i64) -> Result<CheckInResponse, ApiError> {
        let now = Local::now().naive_local();
        let appointment = self.find(appointment_id)?;
        if !can_check_in(appointment, now) {
            return Err(ApiError::Domain(format!(
                "Appointment {} is not available for check-in",
                appointment.ticket_number
            )));
        }

        let response = self.repo.check_in(appointment_id).await?;
        info!(
            "Checked in appointment {} at queue position {}",
            appointment_id, response.queue_position
        );
        self.refresh().await;
        Ok(response)
    }

    fn find(&self, appointment_id: i64) -> Result<&Appointment, ApiError> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.appointment(appointment_id))
            .ok_or_else(|| ApiError::Domain("Appointment not found".to_string()))
    }

    fn begin_pass(&mut self) -> u64 {
        self.pass_seq += 1;
        self.pass_seq
    }

    fn is_current_pass(&self, seq: u64) -> bool {
        self.pass_seq == seq
    }

    /// One full pass: authoritative list, then queue state for the active
    /// subset, all evaluated against the single `now` captured at pass start.
    async fn run_pass(&self, now: NaiveDateTime) -> Result<QueueSnapshot, ApiError> {
        let appointments = self.repo.list_mine().await?;
        let queue = reconcile(
            self.repo.as_ref(),
            &appointments,
            self.include_scheduled,
            now,
        )
        .await;

        Ok(QueueSnapshot {
            appointments,
            queue,
            taken_at: now,
        })
    }
}
