pub mod health;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation_handlers;
use crate::optimization::handlers as optimization_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Optimization API
        .route("/optimize", post(optimization_handlers::handle_optimize))
        .route(
            "/optimize/advanced",
            post(optimization_handlers::handle_optimize_advanced),
        )
        .route(
            "/optimization/types",
            get(optimization_handlers::handle_optimization_types),
        )
        .route("/validate", post(optimization_handlers::handle_validate))
        // Model catalog
        .route("/models", get(models::list_models_handler))
        .route("/models/:name", get(models::model_details_handler))
        // Generation API
        .route("/generate", post(generation_handlers::handle_generate))
        .route("/task-types", get(generation_handlers::handle_task_types))
        .route(
            "/output-formats",
            get(generation_handlers::handle_output_formats),
        )
        .with_state(state)
}
