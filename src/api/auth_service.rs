use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::client::{ApiClient, ApiError};
use super::models::{LoginForm, RegisterRequest, RegisteredUser, TokenResponse};

/// Authentication surface of the backend: credential exchange and account
/// creation. Neither call requires a bearer token.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a bearer token via `POST /token`
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError>;

    /// Create a new account via `POST /register`
    async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<RegisteredUser, ApiError>;
}

pub struct HttpAuthService {
    client: Arc<ApiClient>,
}

impl HttpAuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        info!("Requesting token for user: {}", username);

        let form = LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        };

        self.client.post_form("/token", &form).await
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<RegisteredUser, ApiError> {
        info!("Registering user: {}", username);

        let body = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        };

        self.client.post_json("/register", None, &body).await
    }
}
