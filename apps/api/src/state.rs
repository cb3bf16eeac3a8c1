use std::sync::Arc;

use sqlx::PgPool;

use crate::intake::catalog::RoleCatalog;
use crate::intake::intent::IntentMatcher;
use crate::intake::scoring::CandidateScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Role requirements, read-only after startup.
    pub catalog: Arc<RoleCatalog>,
    pub intents: Arc<IntentMatcher>,
    /// Pluggable candidate scorer. Default: KeywordScorer.
    pub scorer: Arc<dyn CandidateScorer>,
}
