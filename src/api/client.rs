use log::error;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::config::ApiConfig;

/// Errors surfaced by the backend client. Two cases are distinguished: the
/// request never reached the server, or the server answered with a non-2xx
/// status. Every failure is terminal for the call that produced it; there
/// are no retries.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Thin wrapper over reqwest that knows the backend origin and how to
/// attach a bearer token. Returns the parsed JSON body on any 2xx response;
/// on failure it logs the error payload and propagates it to the caller.
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut builder = self.http.request(method, self.config.endpoint(path));
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn execute<D: DeserializeOwned>(builder: RequestBuilder) -> Result<D, ApiError> {
        let response = builder.send().await.map_err(|e| {
            error!("Request never reached the backend: {}", e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        if status.is_success() {
            response.json::<D>().await.map_err(|e| {
                error!("Failed to parse backend response body: {}", e);
                ApiError::Body(e)
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Backend returned {}: {}", status, message);
            Err(ApiError::Http {
                status: status.as_u16(),
                message,
            })
        }
    }

    pub async fn get<D: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &[(&str, String)],
    ) -> Result<D, ApiError> {
        Self::execute(self.request(Method::GET, path, token).query(query)).await
    }

    pub async fn post_json<B, D>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<D, ApiError>
    where
        B: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        Self::execute(self.request(Method::POST, path, token).json(body)).await
    }

    /// POST with a form-encoded body, as the token endpoint expects
    pub async fn post_form<B, D>(&self, path: &str, form: &B) -> Result<D, ApiError>
    where
        B: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        Self::execute(self.request(Method::POST, path, None).form(form)).await
    }

    pub async fn delete<D: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<D, ApiError> {
        Self::execute(self.request(Method::DELETE, path, token)).await
    }
}
