//! Append-only persistence for chat turns and candidate evaluations.
//! Rows are only ever INSERTed; nothing here UPDATEs or DELETEs.

use sqlx::PgPool;
use tracing::debug;

use crate::intake::intent::ResponseCategory;
use crate::intake::scoring::ScoreResult;
use crate::models::candidate::{CandidateRow, CandidateSummaryRow};
use crate::models::conversation::ConversationRow;

pub struct NewConversation<'a> {
    pub user_input: &'a str,
    pub bot_response: &'a str,
    pub session_id: &'a str,
    pub category: ResponseCategory,
}

pub struct NewCandidate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub experience_text: &'a str,
    pub role_id: &'a str,
    pub evaluation: &'a ScoreResult,
}

pub async fn record_conversation(
    pool: &PgPool,
    turn: NewConversation<'_>,
) -> Result<ConversationRow, sqlx::Error> {
    let row = sqlx::query_as::<_, ConversationRow>(
        r#"
        INSERT INTO conversations (user_input, bot_response, user_session, category)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_input, bot_response, user_session, category, created_at
        "#,
    )
    .bind(turn.user_input)
    .bind(turn.bot_response)
    .bind(turn.session_id)
    .bind(turn.category.as_str())
    .fetch_one(pool)
    .await?;

    debug!("Recorded conversation turn {} for session {}", row.id, row.user_session);
    Ok(row)
}

pub async fn record_candidate(
    pool: &PgPool,
    candidate: NewCandidate<'_>,
) -> Result<CandidateRow, sqlx::Error> {
    let row = sqlx::query_as::<_, CandidateRow>(
        r#"
        INSERT INTO candidates
            (name, email, experience_text, role_id, overall_score, recommendation)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, email, experience_text, role_id,
                  overall_score, recommendation, created_at
        "#,
    )
    .bind(candidate.name)
    .bind(candidate.email)
    .bind(candidate.experience_text)
    .bind(candidate.role_id)
    .bind(candidate.evaluation.overall_score)
    .bind(candidate.evaluation.recommendation.as_str())
    .fetch_one(pool)
    .await?;

    debug!("Recorded candidate {} for role {}", row.id, row.role_id);
    Ok(row)
}

/// All evaluated candidates, best score first. Ties keep insertion order.
pub async fn list_candidates(pool: &PgPool) -> Result<Vec<CandidateSummaryRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateSummaryRow>(
        r#"
        SELECT id, name, email, overall_score, recommendation, role_id, created_at
        FROM candidates
        ORDER BY overall_score DESC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}
