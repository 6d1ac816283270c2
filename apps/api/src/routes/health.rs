use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness message for the API root.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Prompt Optimizer API is running"
    }))
}

/// GET /health
/// Returns a simple status object.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "prompt-optimizer"
    }))
}
