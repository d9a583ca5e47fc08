pub mod client;
pub mod repository;
pub mod session;

pub use client::ApiClient;
pub use repository::{AppointmentRepository, HttpAppointmentRepository};
pub use session::Session;
