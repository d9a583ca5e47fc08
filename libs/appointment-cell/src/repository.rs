use async_trait::async_trait;
use reqwest::Method;

use shared_models::{
    ApiError, Appointment, BookAppointmentRequest, CenterQueueStatus, CheckInResponse,
    QueuePosition, ServiceCenter,
};

use crate::client::ApiClient;

/// Backend operations the queue views depend on. The trait is the seam the
/// view controller is tested against; `HttpAppointmentRepository` is the one
/// real implementation.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn list_mine(&self) -> Result<Vec<Appointment>, ApiError>;

    async fn book(&self, request: &BookAppointmentRequest) -> Result<Appointment, ApiError>;

    async fn cancel(&self, appointment_id: i64) -> Result<(), ApiError>;

    async fn check_in(&self, appointment_id: i64) -> Result<CheckInResponse, ApiError>;

    async fn queue_position(&self, appointment_id: i64) -> Result<QueuePosition, ApiError>;

    async fn service_centers(&self, city: Option<&str>) -> Result<Vec<ServiceCenter>, ApiError>;

    async fn center_queue_status(&self, center_id: i64) -> Result<CenterQueueStatus, ApiError>;
}

pub struct HttpAppointmentRepository {
    client: ApiClient,
}

impl HttpAppointmentRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait]
impl AppointmentRepository for HttpAppointmentRepository {
    async fn list_mine(&self) -> Result<Vec<Appointment>, ApiError> {
        self.client
            .request(Method::GET, "/appointments/my", None)
            .await
    }

    async fn book(&self, request: &BookAppointmentRequest) -> Result<Appointment, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.client
            .request(Method::POST, "/appointments/book", Some(body))
            .await
    }

    async fn cancel(&self, appointment_id: i64) -> Result<(), ApiError> {
        // Response body is a bare confirmation message; discard it
        let _: serde_json::Value = self
            .client
            .request(
                Method::PUT,
                &format!("/appointments/{}/cancel", appointment_id),
                None,
            )
            .await?;
        Ok(())
    }

    async fn check_in(&self, appointment_id: i64) -> Result<CheckInResponse, ApiError> {
        self.client
            .request(
                Method::POST,
                &format!("/queue/checkin/{}", appointment_id),
                None,
            )
            .await
    }

    async fn queue_position(&self, appointment_id: i64) -> Result<QueuePosition, ApiError> {
        self.client
            .request(
                Method::GET,
                &format!("/queue/position/{}", appointment_id),
                None,
            )
            .await
    }

    async fn service_centers(&self, city: Option<&str>) -> Result<Vec<ServiceCenter>, ApiError> {
        let path = match city {
            Some(city) => format!("/appointments/service-centers?city={}", city),
            None => "/appointments/service-centers".to_string(),
        };
        self.client.request(Method::GET, &path, None).await
    }

    async fn center_queue_status(&self, center_id: i64) -> Result<CenterQueueStatus, ApiError> {
        self.client
            .request(Method::GET, &format!("/queue/status/{}", center_id), None)
            .await
    }
}
