use anyhow::Result;
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
    Bot,
};

#[async_trait]
pub trait AuthView: Send + Sync {
    async fn display_welcome(&self) -> Result<()>;
    async fn prompt_login_username(&self) -> Result<()>;
    async fn prompt_login_password(&self, username: &str) -> Result<()>;
    async fn display_login_success(&self) -> Result<()>;
    async fn display_login_error(&self) -> Result<()>;
    async fn prompt_register_username(&self) -> Result<()>;
    async fn prompt_register_email(&self, username: &str) -> Result<()>;
    async fn prompt_register_password(&self) -> Result<()>;
    async fn display_register_success(&self, username: &str) -> Result<()>;
    async fn display_register_error(&self) -> Result<()>;
    async fn display_not_authenticated(&self) -> Result<()>;
}

pub struct TelegramAuthView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramAuthView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    fn auth_keyboard() -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(vec![vec![
            InlineKeyboardButton::callback("Log in", "login"),
            InlineKeyboardButton::callback("Register", "register"),
        ]])
    }
}

#[async_trait]
impl AuthView for TelegramAuthView {
    async fn display_welcome(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "<b>Price Alert Bot</b>\n\nI can watch coin prices for you: \
                 set a target price and get notified when it is reached.\n\n\
                 Please log in or create an account to continue.",
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(Self::auth_keyboard())
            .await?;
        Ok(())
    }

    async fn prompt_login_username(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Please enter your username:")
            .await?;
        Ok(())
    }

    async fn prompt_login_password(&self, username: &str) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!("Logging in as <b>{}</b>. Now enter your password:", username),
            )
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn display_login_success(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "✅ Login successful.")
            .await?;
        Ok(())
    }

    async fn display_login_error(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "❌ Login failed. Please check your username and password and try /login again.",
            )
            .await?;
        Ok(())
    }

    async fn prompt_register_username(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Choose a username for your new account:")
            .await?;
        Ok(())
    }

    async fn prompt_register_email(&self, username: &str) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "Registering <b>{}</b>. Enter the email address for alert notifications:",
                    username
                ),
            )
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn prompt_register_password(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Choose a password:")
            .await?;
        Ok(())
    }

    async fn display_register_success(&self, username: &str) -> Result<()> {
        let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
            "Log in",
            "login",
        )]]);

        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "✅ Account <b>{}</b> created. You can now log in.",
                    username
                ),
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .await?;
        Ok(())
    }

    async fn display_register_error(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "❌ Registration failed. Please try /register again.",
            )
            .await?;
        Ok(())
    }

    async fn display_not_authenticated(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "You are not logged in. Please log in to open your dashboard.",
            )
            .reply_markup(Self::auth_keyboard())
            .await?;
        Ok(())
    }
}
