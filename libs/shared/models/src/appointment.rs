// libs/shared/models/src/appointment.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::center::ServiceCenter;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// An appointment as returned by the backend. `appointment_date` and
/// `scheduled_time` stay as the wire strings (`YYYY-MM-DD`, `HH:MM[:SS]`);
/// combining them into a point in time is done only by the eligibility
/// evaluator, component by component, so a malformed field degrades one card
/// instead of failing the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub ticket_number: String,
    pub user_id: i64,
    pub service_center_id: i64,
    pub appointment_type: AppointmentType,
    pub appointment_date: String,
    pub scheduled_time: String,
    #[serde(default)]
    pub priority: Priority,
    pub status: AppointmentStatus,
    pub queue_position: Option<i32>,
    pub estimated_wait_time: Option<i32>,
    pub checked_in_at: Option<String>,
    pub notes: Option<String>,
    pub special_requirements: Option<String>,
    // Denormalized copy for display; owned by the backend
    pub service_center: ServiceCenter,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::InProgress => write!(f, "in_progress"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "no_show"),
        }
    }
}

impl AppointmentStatus {
    /// Statuses that hold a place in a service center's current-day queue.
    pub fn is_in_queue(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Confirmed | AppointmentStatus::InProgress
        )
    }

    /// Statuses the backend will never move out of.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled | AppointmentStatus::NoShow
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    NewApplication,
    Renewal,
    Replacement,
    Correction,
    Collection,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::NewApplication => write!(f, "new_application"),
            AppointmentType::Renewal => write!(f, "renewal"),
            AppointmentType::Replacement => write!(f, "replacement"),
            AppointmentType::Correction => write!(f, "correction"),
            AppointmentType::Collection => write!(f, "collection"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Normal,
    Elderly,
    Disabled,
    Pregnant,
    Urgent,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Normal => write!(f, "normal"),
            Priority::Elderly => write!(f, "elderly"),
            Priority::Disabled => write!(f, "disabled"),
            Priority::Pregnant => write!(f, "pregnant"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub service_center_id: i64,
    pub appointment_type: AppointmentType,
    pub appointment_date: String,
    pub scheduled_time: String,
    pub priority: Priority,
    pub special_requirements: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub message: String,
    pub queue_position: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&AppointmentStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let status: AppointmentStatus = serde_json::from_str("\"no_show\"").unwrap();
        assert_eq!(status, AppointmentStatus::NoShow);
    }

    #[test]
    fn test_queue_membership_by_status() {
        assert!(AppointmentStatus::Confirmed.is_in_queue());
        assert!(AppointmentStatus::InProgress.is_in_queue());
        assert!(!AppointmentStatus::Scheduled.is_in_queue());
        assert!(!AppointmentStatus::Cancelled.is_in_queue());
    }

    #[test]
    fn test_priority_defaults_to_normal() {
        let priority: Priority = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(priority, Priority::Normal);
        assert_eq!(Priority::default(), Priority::Normal);
    }
}
