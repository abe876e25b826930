use crate::entity::Session;
use chrono::Utc;
use log::info;
use sqlx::{Error as SqlxError, PgPool, Row};

// Store the bearer token for a user, replacing any previous session.
// There is no delete: the client has no logout path.
pub async fn save_session(
    pool: &PgPool,
    telegram_id: i64,
    access_token: &str,
) -> Result<i32, SqlxError> {
    let row = sqlx::query(
        "INSERT INTO sessions (telegram_id, access_token, created_at)
         VALUES ($1, $2, $3)
         ON CONFLICT (telegram_id)
         DO UPDATE SET access_token = $2, created_at = $3
         RETURNING id",
    )
    .bind(telegram_id)
    .bind(access_token)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    let id: i32 = row.try_get("id")?;
    info!("Stored session for Telegram ID: {}", telegram_id);

    Ok(id)
}

// Get the stored session for a user, if any
pub async fn get_session(pool: &PgPool, telegram_id: i64) -> Result<Option<Session>, SqlxError> {
    sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE telegram_id = $1")
        .bind(telegram_id)
        .fetch_optional(pool)
        .await
}

// Check whether a user has a stored session
pub async fn has_session(pool: &PgPool, telegram_id: i64) -> Result<bool, SqlxError> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM sessions WHERE telegram_id = $1")
        .bind(telegram_id)
        .fetch_one(pool)
        .await?;

    let count: i64 = row.try_get("count")?;
    Ok(count > 0)
}
