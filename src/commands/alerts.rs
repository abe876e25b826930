use anyhow::{anyhow, Result};
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use super::{CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::{AlertListState, State};
use crate::interactor::alert_interactor::AlertInteractorImpl;
use crate::interactor::db;
use crate::presenter::alert_presenter::{AlertPresenter, AlertPresenterImpl};
use crate::router::{resolve, Route};
use crate::view::alert_view::TelegramAlertView;
use crate::view::auth_view::{AuthView, TelegramAuthView};

pub(crate) fn alert_presenter(
    bot: Bot,
    chat_id: ChatId,
    services: Arc<ServiceContainer>,
) -> AlertPresenterImpl<AlertInteractorImpl, TelegramAlertView> {
    let interactor = Arc::new(AlertInteractorImpl::new(
        services.db_pool(),
        services.alert_service(),
    ));
    let view = Arc::new(TelegramAlertView::new(bot, chat_id));
    AlertPresenterImpl::new(interactor, view)
}

/// Open the dashboard with fresh view state: page 1, no filter. The
/// previous list state, if any, is discarded on navigation.
pub async fn open_dashboard(
    bot: Bot,
    chat_id: ChatId,
    telegram_id: i64,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let presenter = alert_presenter(bot, chat_id, services);

    let mut list = AlertListState::new();
    presenter.show_dashboard(telegram_id, &mut list).await?;

    dialogue.update(State::AlertDashboard { list }).await?;

    Ok(())
}

pub struct DashboardCommand;

impl CommandHandler for DashboardCommand {
    fn command_name() -> &'static str {
        "dashboard"
    }

    fn description() -> &'static str {
        "open your alert dashboard"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("Dashboard command received from Telegram ID: {}", telegram_id);

        let authenticated = db::has_session(&services.db_pool(), telegram_id)
            .await
            .map_err(|e| anyhow!("Database error: {}", e))?;

        // Without a stored token the dashboard resolves to the login screen
        match resolve(Route::Dashboard, authenticated) {
            Route::Dashboard => {
                if let Some(dialogue) = dialogue {
                    open_dashboard(bot, chat_id, telegram_id, dialogue, services).await?;
                }
            }
            _ => {
                let view = TelegramAuthView::new(bot, chat_id);
                view.display_not_authenticated().await?;
            }
        }

        Ok(())
    }
}

pub struct NewAlertCommand;

impl CommandHandler for NewAlertCommand {
    fn command_name() -> &'static str {
        "new_alert"
    }

    fn description() -> &'static str {
        "create a new price alert"
    }

    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()> {
        let chat_id = msg.chat.id;

        info!("New alert command received from Telegram ID: {}", telegram_id);

        let authenticated = db::has_session(&services.db_pool(), telegram_id)
            .await
            .map_err(|e| anyhow!("Database error: {}", e))?;

        if !authenticated {
            let view = TelegramAuthView::new(bot, chat_id);
            view.display_not_authenticated().await?;
            return Ok(());
        }

        let presenter = alert_presenter(bot, chat_id, services);
        presenter.start_create_flow().await?;

        if let Some(dialogue) = dialogue {
            dialogue.update(State::AwaitingCoinId).await?;
        }

        Ok(())
    }
}

// Handler for the coin id input of the create-alert dialogue
pub async fn receive_coin_id(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;

    if let Some(coin_id) = msg.text() {
        let coin_id = coin_id.trim();

        let presenter = alert_presenter(bot, chat_id, services);
        presenter.handle_coin_id(coin_id).await?;

        dialogue
            .update(State::AwaitingTargetPrice {
                coin_id: coin_id.to_string(),
            })
            .await?;
    } else {
        bot.send_message(chat_id, "Please enter a coin id.").await?;
    }

    Ok(())
}

// Handler for the target price input of the create-alert dialogue
pub async fn receive_target_price(
    bot: Bot,
    msg: Message,
    state: State,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;

    let coin_id = match state {
        State::AwaitingTargetPrice { coin_id } => coin_id,
        _ => return Ok(()),
    };

    if let Some(text) = msg.text() {
        let presenter = alert_presenter(bot, chat_id, services);

        // Invalid input keeps the dialogue waiting for another attempt
        if let Some(target_price) = presenter.handle_target_price(&coin_id, text).await? {
            dialogue
                .update(State::AwaitingAlertConfirmation {
                    coin_id,
                    target_price,
                })
                .await?;
        }
    } else {
        bot.send_message(chat_id, "Please enter a target price.")
            .await?;
    }

    Ok(())
}

// Handler for the confirmation input of the create-alert dialogue
pub async fn receive_alert_confirmation(
    bot: Bot,
    msg: Message,
    state: State,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    let chat_id = msg.chat.id;
    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);

    let (coin_id, target_price) = match state {
        State::AwaitingAlertConfirmation {
            coin_id,
            target_price,
        } => (coin_id, target_price),
        _ => return Ok(()),
    };

    dialogue.update(State::Start).await?;

    if let Some(text) = msg.text() {
        let presenter = alert_presenter(bot, chat_id, services);
        presenter
            .handle_create_confirmation(telegram_id, text, &coin_id, target_price)
            .await?;
    }

    Ok(())
}
