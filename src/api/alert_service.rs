use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::client::{ApiClient, ApiError};
use super::models::{CreateAlertRequest, DeleteResult};
use crate::entity::{Alert, AlertStatus};

/// Alert surface of the backend. Every call carries the caller's bearer
/// token; the backend scopes results to the token's owner.
#[async_trait]
pub trait AlertService: Send + Sync {
    /// `POST /alerts/create/`, returns the created alert
    async fn create_alert(
        &self,
        token: &str,
        coin_id: &str,
        target_price: f64,
    ) -> Result<Alert, ApiError>;

    /// `DELETE /alerts/delete/{id}`
    async fn delete_alert(&self, token: &str, alert_id: i64) -> Result<DeleteResult, ApiError>;

    /// `GET /alerts/`, one page of alerts, optionally filtered by status
    async fn fetch_alerts(
        &self,
        token: &str,
        status: Option<AlertStatus>,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Alert>, ApiError>;
}

/// Query parameters for `GET /alerts/`. The status parameter is omitted
/// when no filter is set; the backend treats a missing and an empty status
/// the same way.
fn list_query(status: Option<AlertStatus>, skip: u32, limit: u32) -> Vec<(&'static str, String)> {
    let mut query = Vec::with_capacity(3);
    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }
    query.push(("skip", skip.to_string()));
    query.push(("limit", limit.to_string()));
    query
}

pub struct HttpAlertService {
    client: Arc<ApiClient>,
}

impl HttpAlertService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AlertService for HttpAlertService {
    async fn create_alert(
        &self,
        token: &str,
        coin_id: &str,
        target_price: f64,
    ) -> Result<Alert, ApiError> {
        info!("Creating alert: {} @ {}", coin_id, target_price);

        let body = CreateAlertRequest {
            coin_id: coin_id.to_string(),
            target_price,
        };

        self.client
            .post_json("/alerts/create/", Some(token), &body)
            .await
    }

    async fn delete_alert(&self, token: &str, alert_id: i64) -> Result<DeleteResult, ApiError> {
        info!("Deleting alert: {}", alert_id);

        self.client
            .delete(&format!("/alerts/delete/{}", alert_id), Some(token))
            .await
    }

    async fn fetch_alerts(
        &self,
        token: &str,
        status: Option<AlertStatus>,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<Alert>, ApiError> {
        info!(
            "Fetching alerts: status={:?} skip={} limit={}",
            status, skip, limit
        );

        self.client
            .get("/alerts/", Some(token), &list_query(status, skip, limit))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_omits_status_when_unfiltered() {
        let query = list_query(None, 0, 10);
        assert_eq!(
            query,
            vec![("skip", "0".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn test_list_query_with_filter_and_offset() {
        let query = list_query(Some(AlertStatus::Triggered), 20, 10);
        assert_eq!(
            query,
            vec![
                ("status", "triggered".to_string()),
                ("skip", "20".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }
}
