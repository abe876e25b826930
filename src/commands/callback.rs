use anyhow::Result;
use log::info;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::commands::{alerts, login, register, CommandHandler, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::{AlertListState, AlertStatus, State};
use crate::presenter::alert_presenter::AlertPresenter;

// List actions reachable from the dashboard keyboard
enum ListAction {
    Refresh,
    NextPage,
    PrevPage,
    Filter(Option<AlertStatus>),
    Delete(i64),
}

// Main callback handler function
pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
) -> Result<()> {
    // Extract the callback data
    let callback_data = match q.data.clone() {
        Some(data) => data,
        None => return Ok(()),
    };

    let message = match q.regular_message() {
        Some(message) => message.clone(),
        None => return Ok(()),
    };

    let chat_id = message.chat.id;

    // Get user's Telegram ID
    let telegram_id = q.from.id.0 as i64;

    info!(
        "Received callback: {} from user {}",
        callback_data, telegram_id
    );

    // Acknowledge the callback query to stop loading animation
    if let Err(err) = bot.answer_callback_query(q.id.clone()).await {
        info!("Failed to answer callback query: {}", err);
    }

    // Process the callback based on its type
    if callback_data == "login" {
        login::LoginCommand::execute(bot, message, telegram_id, Some(dialogue), services).await?;
    } else if callback_data == "register" {
        register::RegisterCommand::execute(bot, message, telegram_id, Some(dialogue), services)
            .await?;
    } else if callback_data == "create_alert" {
        alerts::NewAlertCommand::execute(bot, message, telegram_id, Some(dialogue), services)
            .await?;
    } else if callback_data == "refresh_alerts" {
        handle_list_action(
            bot,
            chat_id,
            telegram_id,
            dialogue,
            services,
            ListAction::Refresh,
        )
        .await?;
    } else if callback_data == "alerts_next" {
        handle_list_action(
            bot,
            chat_id,
            telegram_id,
            dialogue,
            services,
            ListAction::NextPage,
        )
        .await?;
    } else if callback_data == "alerts_prev" {
        handle_list_action(
            bot,
            chat_id,
            telegram_id,
            dialogue,
            services,
            ListAction::PrevPage,
        )
        .await?;
    } else if let Some(filter_name) = callback_data.strip_prefix("alerts_filter_") {
        let filter = match parse_filter(filter_name) {
            Some(filter) => filter,
            None => {
                bot.send_message(chat_id, "Unknown filter").await?;
                return Ok(());
            }
        };
        handle_list_action(
            bot,
            chat_id,
            telegram_id,
            dialogue,
            services,
            ListAction::Filter(filter),
        )
        .await?;
    } else if let Some(alert_id_str) = callback_data.strip_prefix("delete_alert_") {
        if let Ok(alert_id) = alert_id_str.parse::<i64>() {
            handle_list_action(
                bot,
                chat_id,
                telegram_id,
                dialogue,
                services,
                ListAction::Delete(alert_id),
            )
            .await?;
        } else {
            bot.send_message(chat_id, "Invalid alert ID").await?;
        }
    } else {
        info!("Unhandled callback data: {}", callback_data);
    }

    Ok(())
}

// Map a filter callback suffix to a status filter. "all" clears the filter.
fn parse_filter(name: &str) -> Option<Option<AlertStatus>> {
    match name {
        "all" => Some(None),
        "created" => Some(Some(AlertStatus::Created)),
        "triggered" => Some(Some(AlertStatus::Triggered)),
        _ => None,
    }
}

// Load the dashboard state from the dialogue; a missing state (e.g. a
// button on an old message after a restart) falls back to page 1, no filter.
async fn load_list_state(dialogue: &MyDialogue) -> Result<AlertListState> {
    Ok(match dialogue.get().await? {
        Some(State::AlertDashboard { list }) => list,
        _ => AlertListState::new(),
    })
}

async fn handle_list_action(
    bot: Bot,
    chat_id: ChatId,
    telegram_id: i64,
    dialogue: MyDialogue,
    services: Arc<ServiceContainer>,
    action: ListAction,
) -> Result<()> {
    let presenter = alerts::alert_presenter(bot, chat_id, services);
    let mut list = load_list_state(&dialogue).await?;

    match action {
        ListAction::Refresh => presenter.show_dashboard(telegram_id, &mut list).await?,
        ListAction::NextPage => presenter.next_page(telegram_id, &mut list).await?,
        ListAction::PrevPage => presenter.prev_page(telegram_id, &mut list).await?,
        ListAction::Filter(filter) => {
            presenter.change_filter(telegram_id, &mut list, filter).await?
        }
        ListAction::Delete(alert_id) => {
            presenter.delete_alert(telegram_id, &mut list, alert_id).await?
        }
    }

    dialogue.update(State::AlertDashboard { list }).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("all"), Some(None));
        assert_eq!(parse_filter("created"), Some(Some(AlertStatus::Created)));
        assert_eq!(parse_filter("triggered"), Some(Some(AlertStatus::Triggered)));
        assert_eq!(parse_filter("deleted"), None);
    }
}
