use crate::entity::{Alert, AlertListState, AlertStatus};
use crate::utils::format_price;
use anyhow::Result;
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
    Bot,
};

#[async_trait]
pub trait AlertView: Send + Sync {
    async fn display_dashboard(&self, list: &AlertListState) -> Result<()>;
    async fn display_fetch_error(&self) -> Result<()>;
    async fn display_delete_error(&self) -> Result<()>;
    async fn display_create_error(&self) -> Result<()>;
    async fn display_alert_created(&self, alert: &Alert) -> Result<()>;
    async fn prompt_coin_id(&self) -> Result<()>;
    async fn prompt_target_price(&self, coin_id: &str) -> Result<()>;
    async fn display_invalid_price(&self) -> Result<()>;
    async fn prompt_create_confirmation(&self, coin_id: &str, target_price: f64) -> Result<()>;
    async fn display_create_cancelled(&self) -> Result<()>;
}

pub struct TelegramAlertView {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramAlertView {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }

    fn filter_label(filter: Option<AlertStatus>) -> &'static str {
        match filter {
            None => "All",
            Some(AlertStatus::Created) => "Created",
            Some(AlertStatus::Triggered) => "Triggered",
        }
    }

    fn dashboard_keyboard(list: &AlertListState) -> InlineKeyboardMarkup {
        let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();

        // One delete button per alert on the page, two per row
        for pair in list.alerts.chunks(2) {
            rows.push(
                pair.iter()
                    .map(|alert| {
                        InlineKeyboardButton::callback(
                            format!("🗑 Delete #{}", alert.id),
                            format!("delete_alert_{}", alert.id),
                        )
                    })
                    .collect(),
            );
        }

        rows.push(vec![
            InlineKeyboardButton::callback("All", "alerts_filter_all"),
            InlineKeyboardButton::callback("Created", "alerts_filter_created"),
            InlineKeyboardButton::callback("Triggered", "alerts_filter_triggered"),
        ]);

        // "Previous" only exists past page 1; "Next" is always offered
        let mut pager = Vec::new();
        if list.has_prev() {
            pager.push(InlineKeyboardButton::callback("⬅️ Previous", "alerts_prev"));
        }
        pager.push(InlineKeyboardButton::callback("Next ➡️", "alerts_next"));
        rows.push(pager);

        rows.push(vec![
            InlineKeyboardButton::callback("➕ Create Alert", "create_alert"),
            InlineKeyboardButton::callback("🔄 Refresh", "refresh_alerts"),
        ]);

        InlineKeyboardMarkup::new(rows)
    }
}

#[async_trait]
impl AlertView for TelegramAlertView {
    async fn display_dashboard(&self, list: &AlertListState) -> Result<()> {
        let mut message = format!(
            "<b>Price Alert Dashboard</b>\nFilter: {} | Page {}\n\n",
            Self::filter_label(list.status_filter),
            list.page()
        );

        if list.alerts.is_empty() {
            message.push_str("No alerts on this page.");
        } else {
            for alert in &list.alerts {
                message.push_str(&format!(
                    "• <b>#{}</b>: {} - target {} - {} ({})\n",
                    alert.id,
                    alert.coin_id,
                    format_price(alert.target_price),
                    alert.status,
                    alert.created_at.format("%Y-%m-%d %H:%M")
                ));
            }
        }

        self.bot
            .send_message(self.chat_id, message)
            .parse_mode(ParseMode::Html)
            .reply_markup(Self::dashboard_keyboard(list))
            .await?;

        Ok(())
    }

    async fn display_fetch_error(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Error fetching alerts")
            .await?;
        Ok(())
    }

    async fn display_delete_error(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Error deleting alert")
            .await?;
        Ok(())
    }

    async fn display_create_error(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Error creating alert")
            .await?;
        Ok(())
    }

    async fn display_alert_created(&self, alert: &Alert) -> Result<()> {
        let keyboard = InlineKeyboardMarkup::new(vec![vec![
            InlineKeyboardButton::callback("Open Dashboard", "refresh_alerts"),
            InlineKeyboardButton::callback("➕ Another Alert", "create_alert"),
        ]]);

        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "✅ Alert <b>#{}</b> created: {} at {}.\n\
                     You will be notified when the target is reached.",
                    alert.id,
                    alert.coin_id,
                    format_price(alert.target_price)
                ),
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .await?;
        Ok(())
    }

    async fn prompt_coin_id(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "Which coin should I watch? Enter its id (e.g. bitcoin):",
            )
            .await?;
        Ok(())
    }

    async fn prompt_target_price(&self, coin_id: &str) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "Watching <b>{}</b>. Enter the target price in USD (e.g. 65000):",
                    coin_id
                ),
            )
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn display_invalid_price(&self) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                "Invalid price. Please enter a positive number (e.g. 65000 or 0.35):",
            )
            .await?;
        Ok(())
    }

    async fn prompt_create_confirmation(&self, coin_id: &str, target_price: f64) -> Result<()> {
        self.bot
            .send_message(
                self.chat_id,
                format!(
                    "Please confirm your alert:\n\n{} at {}\n\nDo you want to proceed? (yes/no)",
                    coin_id,
                    format_price(target_price)
                ),
            )
            .await?;
        Ok(())
    }

    async fn display_create_cancelled(&self) -> Result<()> {
        self.bot
            .send_message(self.chat_id, "Alert creation cancelled.")
            .await?;
        Ok(())
    }
}
