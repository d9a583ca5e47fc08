// libs/shared/models/src/queue.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Live queue state for one appointment, as computed by the backend.
/// Ephemeral: keyed by appointment id, replaced wholesale on every poll,
/// never merged field by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueuePosition {
    /// 1-based rank in line; 0 while being served.
    pub position: i32,
    /// Minutes.
    pub estimated_wait_time: i32,
    pub total_ahead: Option<i32>,
}

impl QueuePosition {
    pub fn is_being_served(&self) -> bool {
        self.position == 0
    }

    pub fn is_next(&self) -> bool {
        self.position == 1
    }
}

/// Aggregate queue state for a whole service center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterQueueStatus {
    pub service_center_id: i64,
    pub service_center_name: String,
    pub total_in_queue: i32,
    /// Ticket number currently at the counter, if any.
    pub current_serving: Option<String>,
    pub average_wait_time: i32,
    pub estimated_wait_time: i32,
    pub last_updated: DateTime<Utc>,
}
