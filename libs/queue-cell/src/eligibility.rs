//! Pure date/time gating for appointment actions. Every function takes the
//! caller's snapshot of "now" so a whole render pass sees one consistent
//! clock. Malformed wire strings never panic: they log and evaluate to
//! `false`, which blocks the action.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use shared_models::{Appointment, AppointmentStatus};

/// Parse a `YYYY-MM-DD` wire string into a calendar date by explicit
/// components. Date-only strings must never go through an instant parser:
/// that reads them as UTC midnight and shifts the displayed day in
/// negative-offset timezones.
pub fn parse_local_date(value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Unparseable appointment date '{}': {}", value, e);
            None
        }
    }
}

/// Parse an `HH:MM[:SS]` wire string.
pub fn parse_local_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|e| {
            warn!("Unparseable appointment time '{}': {}", value, e);
            e
        })
        .ok()
}

pub fn is_today(date: &str, today: NaiveDate) -> bool {
    parse_local_date(date).is_some_and(|d| d == today)
}

/// True if the date is strictly before today, or if it is today and the
/// combined local date-time is strictly before `now`. Unparseable input
/// evaluates to `false`.
pub fn is_past(date: &str, time: Option<&str>, now: NaiveDateTime) -> bool {
    let Some(appointment_date) = parse_local_date(date) else {
        return false;
    };

    if appointment_date < now.date() {
        return true;
    }

    if appointment_date == now.date() {
        if let Some(appointment_time) = time.and_then(parse_local_time) {
            return appointment_date.and_time(appointment_time) < now;
        }
    }

    false
}

/// Check-in is a same-day action on a not-yet-elapsed scheduled appointment.
pub fn can_check_in(appointment: &Appointment, now: NaiveDateTime) -> bool {
    appointment.status == AppointmentStatus::Scheduled
        && is_today(&appointment.appointment_date, now.date())
        && !is_past(
            &appointment.appointment_date,
            Some(&appointment.scheduled_time),
            now,
        )
}

pub fn can_cancel(appointment: &Appointment) -> bool {
    matches!(
        appointment.status,
        AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
    )
}
