use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health
/// Static liveness probe with service version. Does not touch the database.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME")
    }))
}
