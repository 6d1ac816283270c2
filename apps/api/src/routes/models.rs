use axum::extract::Path;
use axum::Json;

use crate::errors::AppError;
use crate::llm_client::catalog::{available_models, find_model, ModelInfo};

/// GET /models
/// The advertised model catalog with derived limits and pricing.
pub async fn list_models_handler() -> Json<Vec<ModelInfo>> {
    Json(available_models())
}

/// GET /models/:name
/// One catalog entry, or 404 for a name outside the catalog.
pub async fn model_details_handler(
    Path(model_name): Path<String>,
) -> Result<Json<ModelInfo>, AppError> {
    find_model(&model_name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Model not found".to_string()))
}
