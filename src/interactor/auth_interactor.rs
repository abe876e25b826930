use crate::api::models::{RegisteredUser, TokenResponse};
use crate::api::AuthService;
use crate::interactor::db;
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use sqlx::PgPool;
use std::sync::Arc;

#[async_trait]
pub trait AuthInteractor: Send + Sync {
    /// Log in against the backend and persist the returned token
    async fn login(
        &self,
        telegram_id: i64,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse>;

    /// Create a backend account. No token is issued; the user still has to
    /// log in afterwards.
    async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<RegisteredUser>;
}

pub struct AuthInteractorImpl {
    db_pool: Arc<PgPool>,
    auth_service: Arc<dyn AuthService>,
}

impl AuthInteractorImpl {
    pub fn new(db_pool: Arc<PgPool>, auth_service: Arc<dyn AuthService>) -> Self {
        Self {
            db_pool,
            auth_service,
        }
    }
}

#[async_trait]
impl AuthInteractor for AuthInteractorImpl {
    async fn login(
        &self,
        telegram_id: i64,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse> {
        let token = self.auth_service.login(username, password).await?;

        db::save_session(&self.db_pool, telegram_id, &token.access_token).await?;
        info!("User {} authenticated as '{}'", telegram_id, username);

        Ok(token)
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<RegisteredUser> {
        let user = self.auth_service.register(username, password, email).await?;

        Ok(user)
    }
}
