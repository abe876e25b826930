/// Backend API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base origin of the price-alert backend
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        use std::env;

        Self {
            base_url: env::var("ALERT_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
        }
    }

    /// Absolute URL for a relative path like `/alerts/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint("/token"), "http://127.0.0.1:8000/token");

        let config = ApiConfig {
            base_url: "http://api.example.com/".to_string(),
        };
        assert_eq!(
            config.endpoint("/alerts/"),
            "http://api.example.com/alerts/"
        );
    }
}
