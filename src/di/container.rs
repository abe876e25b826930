use std::sync::Arc;

use sqlx::PgPool;

use crate::api::{
    AlertService, ApiClient, ApiConfig, AuthService, HttpAlertService, HttpAuthService,
};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    // Core services
    db_pool: Arc<PgPool>,

    // Backend API services
    auth_service: Arc<dyn AuthService>,
    alert_service: Arc<dyn AlertService>,

    // Configuration
    api_config: ApiConfig,
}

impl ServiceContainer {
    /// Create a new service container with essential dependencies
    pub fn new(db_pool: Arc<PgPool>) -> Self {
        // Create configuration
        let api_config = ApiConfig::from_env();

        // One shared HTTP client for both backend surfaces
        let api_client = Arc::new(ApiClient::new(api_config.clone()));

        let auth_service =
            Arc::new(HttpAuthService::new(api_client.clone())) as Arc<dyn AuthService>;
        let alert_service = Arc::new(HttpAlertService::new(api_client)) as Arc<dyn AlertService>;

        Self {
            db_pool,
            auth_service,
            alert_service,
            api_config,
        }
    }

    // Accessor methods

    pub fn db_pool(&self) -> Arc<PgPool> {
        self.db_pool.clone()
    }

    pub fn auth_service(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    pub fn alert_service(&self) -> Arc<dyn AlertService> {
        self.alert_service.clone()
    }

    pub fn api_config(&self) -> ApiConfig {
        self.api_config.clone()
    }
}
