use async_trait::async_trait;

pub mod alert_view;
pub mod auth_view;

// Base view trait
#[async_trait]
pub trait View: Send + Sync {
    // Each view implementation will define its specific methods
}
