use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted bearer token for one Telegram user. Set on successful login,
/// read by every authenticated backend call. There is no logout path, so a
/// session row is never removed, only replaced by the next login.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Session {
    pub id: i32,
    pub telegram_id: i64,
    pub access_token: String,
    pub created_at: DateTime<Utc>,
}
