#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Local};

use appointment_cell::AppointmentRepository;
use shared_models::{
    ApiError, Appointment, AppointmentStatus, AppointmentType, BookAppointmentRequest,
    CenterQueueStatus, CheckInResponse, Priority, QueuePosition, ServiceCenter,
};

pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn days_from_today(days: i64) -> String {
    (Local::now().date_naive() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn test_center(id: i64) -> ServiceCenter {
    ServiceCenter {
        id,
        name: format!("Center {}", id),
        code: format!("C{:02}", id),
        address: "1 Main St".to_string(),
        city: "Harare".to_string(),
        province: "Harare".to_string(),
        phone: None,
        email: None,
        opening_time: "08:00:00".to_string(),
        closing_time: "16:30:00".to_string(),
        max_daily_capacity: 100,
        current_queue_length: 0,
        average_service_time: 15,
        is_active: true,
        is_operational: true,
    }
}

pub fn test_appointment(
    id: i64,
    status: AppointmentStatus,
    date: &str,
    time: &str,
) -> Appointment {
    Appointment {
        id,
        ticket_number: format!("C01-{:03}", id),
        user_id: 7,
        service_center_id: 1,
        appointment_type: AppointmentType::Renewal,
        appointment_date: date.to_string(),
        scheduled_time: time.to_string(),
        priority: Priority::Normal,
        status,
        queue_position: None,
        estimated_wait_time: None,
        checked_in_at: None,
        notes: None,
        special_requirements: None,
        service_center: test_center(1),
    }
}

/// In-memory repository standing in for the backend. Holds an authoritative
/// appointment list that `cancel`/`check_in` mutate, so a post-action refetch
/// observes server-side state the way the real flow does.
#[derive(Default)]
pub struct FakeRepository {
    pub appointments: Mutex<Vec<Appointment>>,
    pub positions: Mutex<HashMap<i64, QueuePosition>>,
    pub failing_positions: Mutex<HashSet<i64>>,
    pub fail_list: AtomicBool,
    pub list_calls: AtomicUsize,
    pub position_calls: AtomicUsize,
    pub cancel_calls: AtomicUsize,
    pub check_in_calls: AtomicUsize,
}

impl FakeRepository {
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: Mutex::new(appointments),
            ..Default::default()
        }
    }

    pub fn set_position(&self, id: i64, position: i32, wait: i32) {
        self.positions.lock().unwrap().insert(
            id,
            QueuePosition {
                position,
                estimated_wait_time: wait,
                total_ahead: Some(position - 1),
            },
        );
    }

    pub fn fail_position(&self, id: i64) {
        self.failing_positions.lock().unwrap().insert(id);
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn check_in_call_count(&self) -> usize {
        self.check_in_calls.load(Ordering::SeqCst)
    }

    pub fn cancel_call_count(&self) -> usize {
        self.cancel_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AppointmentRepository for FakeRepository {
    async fn list_mine(&self) -> Result<Vec<Appointment>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ApiError::Network("connection reset".to_string()));
        }
        Ok(self.appointments.lock().unwrap().clone())
    }

    async fn book(&self, _request: &BookAppointmentRequest) -> Result<Appointment, ApiError> {
        Err(ApiError::Domain("booking not supported by fake".to_string()))
    }

    async fn cancel(&self, appointment_id: i64) -> Result<(), ApiError> {
        self.cancel_calls.fetch_add(1, Ordering::SeqCst);
        let mut appointments = self.appointments.lock().unwrap();
        match appointments.iter_mut().find(|a| a.id == appointment_id) {
            Some(appointment) => {
                appointment.status = AppointmentStatus::Cancelled;
                Ok(())
            }
            None => Err(ApiError::Domain("Appointment not found".to_string())),
        }
    }

    async fn check_in(&self, appointment_id: i64) -> Result<CheckInResponse, ApiError> {
        self.check_in_calls.fetch_add(1, Ordering::SeqCst);
        let mut appointments = self.appointments.lock().unwrap();
        match appointments.iter_mut().find(|a| a.id == appointment_id) {
            Some(appointment) => {
                appointment.status = AppointmentStatus::Confirmed;
                Ok(CheckInResponse {
                    message: "Successfully checked in".to_string(),
                    queue_position: 1,
                })
            }
            None => Err(ApiError::Domain("Appointment not found".to_string())),
        }
    }

    async fn queue_position(&self, appointment_id: i64) -> Result<QueuePosition, ApiError> {
        self.position_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_positions.lock().unwrap().contains(&appointment_id) {
            return Err(ApiError::Network("center unreachable".to_string()));
        }
        self.positions
            .lock()
            .unwrap()
            .get(&appointment_id)
            .cloned()
            .ok_or_else(|| ApiError::Domain("Queue info not available for this date".to_string()))
    }

    async fn service_centers(&self, _city: Option<&str>) -> Result<Vec<ServiceCenter>, ApiError> {
        Ok(vec![test_center(1)])
    }

    async fn center_queue_status(&self, _center_id: i64) -> Result<CenterQueueStatus, ApiError> {
        Err(ApiError::Domain("not supported by fake".to_string()))
    }
}
