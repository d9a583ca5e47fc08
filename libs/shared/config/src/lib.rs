use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_token: Option<String>,
    pub refresh_interval_secs: u64,
    pub default_city: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("QUEUE_API_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("QUEUE_API_BASE_URL not set, using default");
                    "http://localhost:8000".to_string()
                }),
            api_token: env::var("QUEUE_API_TOKEN").ok(),
            refresh_interval_secs: env::var("QUEUE_REFRESH_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| {
                    warn!("QUEUE_REFRESH_INTERVAL_SECS not set or invalid, using default");
                    30
                }),
            default_city: env::var("QUEUE_DEFAULT_CITY").ok(),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_token.as_ref().is_some_and(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_authenticated_requires_nonempty_token() {
        let mut config = AppConfig {
            api_base_url: "http://localhost:8000".to_string(),
            api_token: Some(String::new()),
            refresh_interval_secs: 30,
            default_city: None,
        };

        assert!(config.is_configured());
        assert!(!config.is_authenticated());

        config.api_token = Some("token".to_string());
        assert!(config.is_authenticated());
    }
}
