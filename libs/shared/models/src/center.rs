// libs/shared/models/src/center.rs
use serde::{Deserialize, Serialize};

/// A physical service center with its own daily queue. Operating times come
/// through as `HH:MM[:SS]` strings, same rule as appointment times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCenter {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub opening_time: String,
    pub closing_time: String,
    pub max_daily_capacity: i32,
    pub current_queue_length: i32,
    pub average_service_time: i32,
    pub is_active: bool,
    pub is_operational: bool,
}

impl ServiceCenter {
    pub fn display_location(&self) -> String {
        format!("{}, {}", self.city, self.province)
    }
}
