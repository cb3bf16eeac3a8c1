use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted candidate evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub experience_text: String,
    pub role_id: String,
    pub overall_score: f64,
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
}

/// Listing view of a candidate; omits the experience text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateSummaryRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(rename = "score")]
    pub overall_score: f64,
    pub recommendation: String,
    pub role_id: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}
