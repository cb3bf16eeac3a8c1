pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::intake::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/chat", post(handlers::handle_chat))
        .route("/api/evaluate", post(handlers::handle_evaluate))
        .route("/api/candidates", get(handlers::handle_list_candidates))
        .route("/api/roles", get(handlers::handle_list_roles))
        .with_state(state)
}
