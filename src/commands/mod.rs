use anyhow::Result;
use std::sync::Arc;
use teloxide::{dispatching::dialogue::InMemStorage, prelude::*};

use crate::di::ServiceContainer;
use crate::entity::State;
use teloxide::dispatching::dialogue::Dialogue;

pub mod alerts;
pub mod callback;
pub mod help;
pub mod login;
pub mod register;
pub mod start;

pub type MyDialogue = Dialogue<State, InMemStorage<State>>;

/// Trait that defines a command handler
pub trait CommandHandler {
    /// The command name in lowercase
    fn command_name() -> &'static str;

    /// The command description for help
    fn description() -> &'static str;

    /// Execute the command
    async fn execute(
        bot: Bot,
        msg: Message,
        telegram_id: i64,
        dialogue: Option<MyDialogue>,
        services: Arc<ServiceContainer>,
    ) -> Result<()>;
}

/// Register all command handlers in the command system
pub fn register_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            start::StartCommand::command_name(),
            start::StartCommand::description(),
        ),
        (
            login::LoginCommand::command_name(),
            login::LoginCommand::description(),
        ),
        (
            register::RegisterCommand::command_name(),
            register::RegisterCommand::description(),
        ),
        (
            alerts::DashboardCommand::command_name(),
            alerts::DashboardCommand::description(),
        ),
        (
            alerts::NewAlertCommand::command_name(),
            alerts::NewAlertCommand::description(),
        ),
        (
            help::HelpCommand::command_name(),
            help::HelpCommand::description(),
        ),
    ]
}

/// Bot Commands enum for teloxide command filter
#[derive(teloxide::utils::command::BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum BotCommands {
    #[command(description = "start the bot")]
    Start,
    #[command(description = "log in to your price-alert account")]
    Login,
    #[command(description = "create a new account")]
    Register,
    #[command(description = "open your alert dashboard")]
    Dashboard,
    #[command(rename = "new_alert", description = "create a new price alert")]
    NewAlert,
    #[command(description = "display this help message")]
    Help,
}
