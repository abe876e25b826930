use anyhow::{anyhow, Result};
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{alerts, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::interactor::db;
use crate::router::{resolve, Route};
use crate::view::auth_view::{AuthView, TelegramAuthView};

pub struct StartCommand;

impl CommandHandler for StartCommand {
    fn command_name() -> &'static str {
        "start"
    }

    fn description() -> &'static str {
        "start the bot"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Start command received from Telegram ID: {}", telegram_id);

        let authenticated = db::has_session(&services.db_pool(), telegram_id)
            .await
            .map_err(|e| anyhow!("Database error: {}", e))?;

        // The root screen resolves to the dashboard for an authenticated
        // user and to the login screen otherwise.
        match resolve(Route::Root, authenticated) {
            Route::Dashboard => {
                if let Some(dialogue) = dialogue {
                    alerts::open_dashboard(bot, chat_id, telegram_id, dialogue, services).await?;
                }
            }
            _ => {
                let view = TelegramAuthView::new(bot, chat_id);
                view.display_welcome().await?;
            }
        }

        Ok(())
    }
}
