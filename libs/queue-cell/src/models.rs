// libs/queue-cell/src/models.rs
use std::collections::HashMap;

use chrono::NaiveDateTime;

use shared_models::{Appointment, QueuePosition};

/// Lifecycle of the queue view. `Ready` and a background refresh coexist:
/// the refreshing flag lives on the controller, not here, so the previously
/// displayed snapshot survives a failed refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// One consistent picture of the user's appointments and their live queue
/// state, produced by a single reconciliation pass against a single "now".
#[derive(Debug, Clone)]
pub struct QueueSnapshot {
    pub appointments: Vec<Appointment>,
    pub queue: HashMap<i64, QueuePosition>,
    pub taken_at: NaiveDateTime,
}

impl QueueSnapshot {
    pub fn appointment(&self, id: i64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn position(&self, id: i64) -> Option<&QueuePosition> {
        self.queue.get(&id)
    }

    /// Appointments still in play: everything not in a terminal status.
    pub fn upcoming(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter().filter(|a| !a.status.is_terminal())
    }
}
