use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted chat turn.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConversationRow {
    pub id: i64,
    pub user_input: String,
    pub bot_response: String,
    pub user_session: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}
