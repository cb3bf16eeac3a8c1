//! Axum route handlers for the intake API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::catalog::RoleRequirements;
use crate::intake::intent::ResponseCategory;
use crate::intake::scoring::ScoreResult;
use crate::intake::store::{self, NewCandidate, NewConversation};
use crate::models::candidate::CandidateSummaryRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Reads an explicit `null` the same as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub category: ResponseCategory,
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Role to score against; the catalog's default role when absent.
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub evaluation: ScoreResult,
    pub role_id: String,
    pub candidate_id: i64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<CandidateSummaryRow>,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub default_role: String,
    pub roles: Vec<RoleRequirements>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/chat
///
/// Classifies the message, logs the turn and returns the canned reply.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let session_id = request
        .session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let reply = state.intents.respond(&request.message);

    let turn = store::record_conversation(
        &state.db,
        NewConversation {
            user_input: &request.message,
            bot_response: reply.text,
            session_id: &session_id,
            category: reply.category,
        },
    )
    .await
    .map_err(|e| AppError::Chat(e.into()))?;

    info!(
        "Chat turn {} in session {session_id} classified as {}",
        turn.id,
        reply.category.as_str()
    );

    Ok(Json(ChatResponse {
        response: reply.text.to_string(),
        category: reply.category,
        timestamp: turn.created_at,
        session_id,
    }))
}

/// POST /api/evaluate
///
/// Scores the candidate's experience text against a role and records the result.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let Json(request) = payload?;
    if request.experience.trim().is_empty() {
        return Err(AppError::Validation(
            "Experience text is required".to_string(),
        ));
    }

    let requirements = state
        .catalog
        .resolve(request.role.as_deref())
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Role '{}' not found",
                request.role.as_deref().unwrap_or(state.catalog.default_role())
            ))
        })?;

    let evaluation = state.scorer.score(&request.experience, requirements)?;

    let record = store::record_candidate(
        &state.db,
        NewCandidate {
            name: request.name.trim(),
            email: request.email.trim(),
            experience_text: &request.experience,
            role_id: &requirements.role_id,
            evaluation: &evaluation,
        },
    )
    .await?;

    info!(
        "Candidate {} scored {:.2} for {}: {}",
        record.id,
        evaluation.overall_score,
        requirements.role_id,
        evaluation.recommendation.as_str()
    );

    Ok(Json(EvaluateResponse {
        evaluation,
        role_id: requirements.role_id.clone(),
        candidate_id: record.id,
        timestamp: record.created_at,
    }))
}

/// GET /api/candidates
///
/// All evaluated candidates, highest overall score first.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let candidates = store::list_candidates(&state.db).await?;
    Ok(Json(CandidateListResponse { candidates }))
}

/// GET /api/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        default_role: state.catalog.default_role().to_string(),
        roles: state.catalog.roles().cloned().collect(),
    })
}
