use crate::api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Alert API error: {0}")]
    Api(#[from] ApiError),

    #[error("Telegram API error: {0}")]
    TelegramApi(#[from] teloxide::RequestError),

    #[error("Not authenticated")]
    NotAuthenticated,
}
