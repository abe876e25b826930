pub mod alert_service;
pub mod auth_service;
pub mod client;
pub mod config;
pub mod models;

pub use alert_service::{AlertService, HttpAlertService};
pub use auth_service::{AuthService, HttpAuthService};
pub use client::{ApiClient, ApiError};
pub use config::ApiConfig;
