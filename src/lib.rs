pub mod api;
pub mod commands;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use api::*;
pub use commands::*;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use router::*;
pub use utils::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use sqlx::PgPool;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::Bot;

/// Wire up the application components: the service container, the update
/// router and the dialogue storage.
pub fn create_application(
    bot: Bot,
    db_pool: Arc<PgPool>,
) -> (
    TelegramRouter,
    Bot,
    Arc<ServiceContainer>,
    Arc<InMemStorage<State>>,
) {
    let services = Arc::new(ServiceContainer::new(db_pool));
    let router = TelegramRouter::new(services.clone());
    let storage = InMemStorage::<State>::new();

    (router, bot, services, storage)
}
