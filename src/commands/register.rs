use anyhow::{anyhow, Result};
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::login::auth_presenter;
use super::{alerts, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;
use crate::interactor::db;
use crate::presenter::auth_presenter::AuthPresenter;
use crate::router::{resolve, Route};

pub struct RegisterCommand;

impl CommandHandler for RegisterCommand {
    fn command_name() -> &'static str {
        "register"
    }

    fn description() -> &'static str {
        "create a new account"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Register command received from Telegram ID: {}", telegram_id);

        let authenticated = db::has_session(&services.db_pool(), telegram_id)
            .await
            .map_err(|e| anyhow!("Database error: {}", e))?;

        // Already logged in: the register screen resolves to the dashboard
        if resolve(Route::Register, authenticated) == Route::Dashboard {
            if let Some(dialogue) = dialogue {
                alerts::open_dashboard(bot, chat_id, telegram_id, dialogue, services).await?;
            }
            return Ok(());
        }

        let presenter = auth_presenter(bot, chat_id, services);
        presenter.start_register().await?;

        if let Some(dialogue) = dialogue {
            dialogue.update(State::AwaitingRegisterUsername).await?;
        }

        Ok(())
    }
}

// Handler for the username input of the registration dialogue
pub async fn receive_register_username(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;

    if let Some(username) = msg.text() {
        let presenter = auth_presenter(bot, chat_id, services);
        presenter.handle_register_username(username).await?;

        dialogue
            .update(State::AwaitingRegisterEmail {
                username: username.to_string(),
            })
            .await?;
    } else {
        bot.send_message(chat_id, "Please enter a username.").await?;
    }

    Ok(())
}

// Handler for the email input of the registration dialogue
pub async fn receive_register_email(
    bot: Bot,
    msg: Message,
    state: State,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;

    let username = match state {
        State::AwaitingRegisterEmail { username } => username,
        _ => return Ok(()),
    };

    if let Some(email) = msg.text() {
        let presenter = auth_presenter(bot, chat_id, services);
        presenter.handle_register_email().await?;

        dialogue
            .update(State::AwaitingRegisterPassword {
                username,
                email: email.to_string(),
            })
            .await?;
    } else {
        bot.send_message(chat_id, "Please enter an email address.")
            .await?;
    }

    Ok(())
}

// Handler for the password input of the registration dialogue
pub async fn receive_register_password(
    bot: Bot,
    msg: Message,
    state: State,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;

    let (username, email) = match state {
        State::AwaitingRegisterPassword { username, email } => (username, email),
        _ => return Ok(()),
    };

    if let Some(password) = msg.text() {
        let presenter = auth_presenter(bot, chat_id, services);
        presenter
            .handle_register_password(&username, &email, password)
            .await?;

        dialogue.update(State::Start).await?;
    } else {
        bot.send_message(chat_id, "Please enter a password.").await?;
    }

    Ok(())
}
