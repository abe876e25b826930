use async_trait::async_trait;

pub mod alert_interactor;
pub mod auth_interactor;
pub mod db;

// Base interactor trait
#[async_trait]
pub trait Interactor: Send + Sync {
    // Each interactor implementation will define its specific methods
}
