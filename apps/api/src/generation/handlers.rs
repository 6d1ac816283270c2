//! Axum route handlers for the Generation API.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::generation::generator::{generate_prompt, GenerateRequest, GenerateResponse};
use crate::generation::task_types::{OutputFormat, TaskType};
use crate::state::AppState;

/// POST /generate
///
/// Full generation pipeline. Upstream failures surface as HTTP errors.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let response = generate_prompt(&state.llm, request).await?;
    Ok(Json(response))
}

/// GET /task-types
pub async fn handle_task_types() -> Json<Value> {
    let types: Vec<Value> = TaskType::ALL
        .iter()
        .map(|task| json!({ "type": task.as_str(), "description": task.description() }))
        .collect();
    Json(json!({ "types": types }))
}

/// GET /output-formats
pub async fn handle_output_formats() -> Json<Value> {
    let formats: Vec<Value> = OutputFormat::ALL
        .iter()
        .map(|format| json!({ "format": format.as_str(), "description": format.description() }))
        .collect();
    Json(json!({ "formats": formats }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_task_types_lists_all_five() {
        let Json(value) = handle_task_types().await;
        let types = value["types"].as_array().unwrap();
        assert_eq!(types.len(), 5);
        assert_eq!(types[0]["type"], "general");
        assert_eq!(
            types[1]["description"],
            "Prompts for creative writing, brainstorming, and innovation"
        );
    }

    #[tokio::test]
    async fn test_output_formats_lists_all_four() {
        let Json(value) = handle_output_formats().await;
        let formats = value["formats"].as_array().unwrap();
        assert_eq!(formats.len(), 4);
        assert_eq!(formats[0]["format"], "text");
        assert_eq!(formats[0]["description"], "Free-form text response");
        assert_eq!(formats[3]["format"], "structured");
    }
}
