use crate::api::models::DeleteResult;
use crate::api::AlertService;
use crate::entity::{Alert, AlertStatus, BotError, PAGE_SIZE};
use crate::interactor::db;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

#[async_trait]
pub trait AlertInteractor: Send + Sync {
    async fn create_alert(
        &self,
        telegram_id: i64,
        coin_id: &str,
        target_price: f64,
    ) -> Result<Alert>;

    async fn delete_alert(&self, telegram_id: i64, alert_id: i64) -> Result<DeleteResult>;

    /// Fetch one page of the user's alerts at the given offset
    async fn load_page(
        &self,
        telegram_id: i64,
        status: Option<AlertStatus>,
        offset: u32,
    ) -> Result<Vec<Alert>>;
}

pub struct AlertInteractorImpl {
    db_pool: Arc<PgPool>,
    alert_service: Arc<dyn AlertService>,
}

impl AlertInteractorImpl {
    pub fn new(db_pool: Arc<PgPool>, alert_service: Arc<dyn AlertService>) -> Self {
        Self {
            db_pool,
            alert_service,
        }
    }

    // Resolve the caller's bearer token from the session store
    async fn bearer(&self, telegram_id: i64) -> Result<String> {
        match db::get_session(&self.db_pool, telegram_id).await? {
            Some(session) => Ok(session.access_token),
            None => Err(BotError::NotAuthenticated.into()),
        }
    }
}

#[async_trait]
impl AlertInteractor for AlertInteractorImpl {
    async fn create_alert(
        &self,
        telegram_id: i64,
        coin_id: &str,
        target_price: f64,
    ) -> Result<Alert> {
        let token = self.bearer(telegram_id).await?;

        let alert = self
            .alert_service
            .create_alert(&token, coin_id, target_price)
            .await?;

        Ok(alert)
    }

    async fn delete_alert(&self, telegram_id: i64, alert_id: i64) -> Result<DeleteResult> {
        let token = self.bearer(telegram_id).await?;

        let result = self.alert_service.delete_alert(&token, alert_id).await?;

        Ok(result)
    }

    async fn load_page(
        &self,
        telegram_id: i64,
        status: Option<AlertStatus>,
        offset: u32,
    ) -> Result<Vec<Alert>> {
        let token = self.bearer(telegram_id).await?;

        let alerts = self
            .alert_service
            .fetch_alerts(&token, status, offset, PAGE_SIZE)
            .await?;

        Ok(alerts)
    }
}
