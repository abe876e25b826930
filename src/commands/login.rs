use anyhow::{anyhow, Result};
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{alerts, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::interactor::auth_interactor::AuthInteractorImpl;
use crate::interactor::db;
use crate::presenter::auth_presenter::{AuthPresenter, AuthPresenterImpl};
use crate::router::{resolve, Route};
use crate::view::auth_view::TelegramAuthView;

pub(crate) fn auth_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: Arc<ServiceContainer>,
) -> AuthPresenterImpl<AuthInteractorImpl, TelegramAuthView> {
    let interactor = Arc::new(AuthInteractorImpl::new(
        services.db_pool(),
        services.auth_service(),
    ));
    let view = Arc::new(TelegramAuthView::new(bot, chat_id));
    AuthPresenterImpl::new(interactor, view)
}

pub struct LoginCommand;

impl CommandHandler for LoginCommand {
    fn command_name() -> &'static str {
        "login"
    }

    fn description() -> &'static str {
        "log in to your price-alert account"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Login command received from Telegram ID: {}", telegram_id);

        let authenticated = db::has_session(&services.db_pool(), telegram_id)
            .await
            .map_err(|e| anyhow!("Database error: {}", e))?;

        // Already logged in: the login screen resolves to the dashboard
        if resolve(Route::Login, authenticated) == Route::Dashboard {
            if let Some(dialogue) = dialogue {
                alerts::open_dashboard(bot, chat_id, telegram_id, dialogue, services).await?;
            }
            return Ok(());
        }

        let presenter = auth_presenter(bot, chat_id, services);
        presenter.start_login().await?;

        if let Some(dialogue) = dialogue {
            dialogue.update(State::AwaitingLoginUsername).await?;
        }

        Ok(())
    }
}

// Handler for the username input of the login dialogue
pub async fn receive_login_username(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;

    if let Some(username) = msg.text() {
        let presenter = auth_presenter(bot, chat_id, services);
        presenter.handle_login_username(username).await?;

        dialogue
            .update(State::AwaitingLoginPassword {
                username: username.to_string(),
            })
            .await?;
    } else {
        bot.send_message(chat_id, "Please enter your username.")
            .await?;
    }

    Ok(())
}

// Handler for the password input of the login dialogue
pub async fn receive_login_password(
    bot: Bot,
    msg: Message,
    state: State,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);

    let username = match state {
        State::AwaitingLoginPassword { username } => username,
        _ => return Ok(()),
    };

    if let Some(password) = msg.text() {
        let presenter = auth_presenter(bot.clone(), chat_id, services.clone());
        let authenticated = presenter
            .handle_login_password(telegram_id, &username, password)
            .await?;

        dialogue.update(State::Start).await?;

        if authenticated {
            alerts::open_dashboard(bot, chat_id, telegram_id, dialogue, services).await?;
        }
    } else {
        bot.send_message(chat_id, "Please enter your password.")
            .await?;
    }

    Ok(())
}
