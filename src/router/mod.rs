use async_trait::async_trait;
use std::sync::Arc;
use teloxide::{
    dispatching::dialogue::Dialogue, dispatching::dialogue::InMemStorage,
    dispatching::UpdateHandler, prelude::*,
};

use crate::commands::{self, callback::handle_callback, BotCommands, CommandHandler};
use crate::di::ServiceContainer;
use crate::entity::State;

type MyDialogue = Dialogue<State, InMemStorage<State>>;

/// Screens reachable in the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
}

/// Resolve a requested route against the auth state. Login and register
/// resolve to the dashboard for an authenticated user; the dashboard
/// resolves to login without a stored token; the root always starts at
/// login.
pub fn resolve(route: Route, authenticated: bool) -> Route {
    match route {
        Route::Root => resolve(Route::Login, authenticated),
        Route::Login | Route::Register if authenticated => Route::Dashboard,
        Route::Dashboard if !authenticated => Route::Login,
        other => other,
    }
}

// Base router trait
#[async_trait]
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use teloxide::dispatching::UpdateFilterExt;
        use teloxide::dptree::{self, case};

        let services_start = self.services.clone();
        let services_login = self.services.clone();
        let services_register = self.services.clone();
        let services_dashboard = self.services.clone();
        let services_new_alert = self.services.clone();
        let services_help = self.services.clone();

        // Use BotCommands enum with teloxide's command filter
        let command_handler = teloxide::filter_command::<BotCommands, _>()
            .branch(case![BotCommands::Start].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services = services_start.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::start::StartCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services,
                        )
                        .await
                    }
                },
            ))
            .branch(case![BotCommands::Login].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services = services_login.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::login::LoginCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services,
                        )
                        .await
                    }
                },
            ))
            .branch(case![BotCommands::Register].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services = services_register.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::register::RegisterCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services,
                        )
                        .await
                    }
                },
            ))
            .branch(case![BotCommands::Dashboard].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services = services_dashboard.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::alerts::DashboardCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services,
                        )
                        .await
                    }
                },
            ))
            .branch(case![BotCommands::NewAlert].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services = services_new_alert.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::alerts::NewAlertCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services,
                        )
                        .await
                    }
                },
            ))
            .branch(case![BotCommands::Help].endpoint(
                move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                    let services = services_help.clone();
                    let telegram_id = msg.from().map_or(0, |user| user.id.0 as i64);
                    async move {
                        commands::help::HelpCommand::execute(
                            bot,
                            msg,
                            telegram_id,
                            Some(dialogue),
                            services,
                        )
                        .await
                    }
                },
            ));

        let services_for_dialog1 = self.services.clone();
        let services_for_dialog2 = self.services.clone();
        let services_for_dialog3 = self.services.clone();
        let services_for_dialog4 = self.services.clone();
        let services_for_dialog5 = self.services.clone();
        let services_for_dialog6 = self.services.clone();
        let services_for_dialog7 = self.services.clone();
        let services_for_dialog8 = self.services.clone();
        let services_for_callbacks = self.services.clone();

        let message_handler = Update::filter_message().branch(command_handler).branch(
            dptree::entry()
                .branch(case![State::AwaitingLoginUsername].endpoint(
                    move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                        let services = services_for_dialog1.clone();
                        async move {
                            commands::login::receive_login_username(bot, msg, dialogue, services)
                                .await
                        }
                    },
                ))
                .branch(case![State::AwaitingLoginPassword { username }].endpoint(
                    move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                        let services = services_for_dialog2.clone();
                        async move {
                            commands::login::receive_login_password(
                                bot, msg, state, dialogue, services,
                            )
                            .await
                        }
                    },
                ))
                .branch(case![State::AwaitingRegisterUsername].endpoint(
                    move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                        let services = services_for_dialog3.clone();
                        async move {
                            commands::register::receive_register_username(
                                bot, msg, dialogue, services,
                            )
                            .await
                        }
                    },
                ))
                .branch(case![State::AwaitingRegisterEmail { username }].endpoint(
                    move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                        let services = services_for_dialog4.clone();
                        async move {
                            commands::register::receive_register_email(
                                bot, msg, state, dialogue, services,
                            )
                            .await
                        }
                    },
                ))
                .branch(
                    case![State::AwaitingRegisterPassword { username, email }].endpoint(
                        move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                            let services = services_for_dialog5.clone();
                            async move {
                                commands::register::receive_register_password(
                                    bot, msg, state, dialogue, services,
                                )
                                .await
                            }
                        },
                    ),
                )
                .branch(case![State::AwaitingCoinId].endpoint(
                    move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                        let services = services_for_dialog6.clone();
                        async move {
                            commands::alerts::receive_coin_id(bot, msg, dialogue, services).await
                        }
                    },
                ))
                .branch(case![State::AwaitingTargetPrice { coin_id }].endpoint(
                    move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                        let services = services_for_dialog7.clone();
                        async move {
                            commands::alerts::receive_target_price(
                                bot, msg, state, dialogue, services,
                            )
                            .await
                        }
                    },
                ))
                .branch(
                    case![State::AwaitingAlertConfirmation {
                        coin_id,
                        target_price
                    }]
                    .endpoint(
                        move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                            let services = services_for_dialog8.clone();
                            async move {
                                commands::alerts::receive_alert_confirmation(
                                    bot, msg, state, dialogue, services,
                                )
                                .await
                            }
                        },
                    ),
                ),
        );

        // Add callback query handler for our buttons
        let callback_handler = Update::filter_callback_query().endpoint(
            move |bot: Bot, q: CallbackQuery, dialogue: MyDialogue| {
                let services = services_for_callbacks.clone();
                async move { handle_callback(bot, q, dialogue, services).await }
            },
        );

        teloxide::dispatching::dialogue::enter::<Update, InMemStorage<State>, State, _>()
            .branch(message_handler)
            .branch(callback_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_and_register_redirect_when_authenticated() {
        assert_eq!(resolve(Route::Login, true), Route::Dashboard);
        assert_eq!(resolve(Route::Register, true), Route::Dashboard);
    }

    #[test]
    fn test_dashboard_requires_a_token() {
        assert_eq!(resolve(Route::Dashboard, false), Route::Login);
        assert_eq!(resolve(Route::Dashboard, true), Route::Dashboard);
    }

    #[test]
    fn test_root_always_goes_through_login() {
        assert_eq!(resolve(Route::Root, false), Route::Login);
        assert_eq!(resolve(Route::Root, true), Route::Dashboard);
    }

    #[test]
    fn test_login_and_register_stay_put_when_unauthenticated() {
        assert_eq!(resolve(Route::Login, false), Route::Login);
        assert_eq!(resolve(Route::Register, false), Route::Register);
    }
}
