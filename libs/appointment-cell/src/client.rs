use std::sync::Arc;

use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::{normalize_detail, ApiError, LoginRequest, Token};

use crate::session::Session;

/// Thin wrapper over `reqwest` for the queue-management backend. Every call
/// is a single round trip: no caching, no automatic retry. All requests go
/// through `request`, which is the only place the session token is attached
/// and the only place status codes are mapped into `ApiError`.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Arc<Session>) -> Self {
        if let Some(token) = &config.api_token {
            if !token.is_empty() {
                session.set_token(token.clone());
            }
        }

        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        headers
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self.client.request(method, &url).headers(self.get_headers());

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        // `From<reqwest::Error>` sorts transport failures into Network and
        // body-decode failures into Parse
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, error_text);

            let message = match serde_json::from_str::<Value>(&error_text) {
                Ok(payload) => normalize_detail(&payload),
                Err(_) if !error_text.is_empty() => error_text,
                Err(_) => format!("Request failed with status {}", status),
            };

            return Err(if status == StatusCode::UNAUTHORIZED {
                ApiError::Auth(message)
            } else {
                ApiError::Domain(message)
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Authenticate and store the bearer token on the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| ApiError::Parse(e.to_string()))?;

        let token: Token = self
            .request(Method::POST, "/auth/login-email", Some(body))
            .await?;

        self.session.set_token(token.access_token);
        Ok(())
    }
}
