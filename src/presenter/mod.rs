use async_trait::async_trait;

pub mod alert_presenter;
pub mod auth_presenter;

// Base presenter trait
#[async_trait]
pub trait Presenter: Send + Sync {
    // Each presenter implementation will define its specific methods
}
