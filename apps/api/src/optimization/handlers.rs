//! Axum route handlers for the Optimization API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::errors::AppError;
use crate::optimization::goals::OptimizationGoal;
use crate::optimization::optimizer::{
    optimize_prompt, AdvancedOptimizeRequest, AdvancedOptimizeResponse, OptimizeRequest,
    OptimizeResponse,
};
use crate::optimization::validation::{validate_prompt, ValidationReport};
use crate::state::AppState;

/// `POST /validate` accepts the prompt either way: as a `?prompt=`
/// query parameter or as a `{"prompt": ...}` JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateParams {
    pub prompt: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /optimize
///
/// Full optimization pipeline. Upstream failures surface as HTTP errors.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let response = optimize_prompt(&state.llm, request).await?;
    Ok(Json(response))
}

/// POST /optimize/advanced
///
/// Wrapper contract: always HTTP 200. Any failure, validation included, is
/// reported in the `success`/`error` fields instead of the status code.
pub async fn handle_optimize_advanced(
    State(state): State<AppState>,
    Json(request): Json<AdvancedOptimizeRequest>,
) -> Json<AdvancedOptimizeResponse> {
    match optimize_prompt(&state.llm, request.into()).await {
        Ok(response) => Json(AdvancedOptimizeResponse {
            success: true,
            optimized_prompt: Some(response.optimized_prompt),
            suggestions: response.suggestions,
            error: None,
        }),
        Err(e) => {
            warn!("Advanced optimization failed: {e}");
            Json(AdvancedOptimizeResponse {
                success: false,
                optimized_prompt: None,
                suggestions: vec![],
                error: Some(e.to_string()),
            })
        }
    }
}

/// GET /optimization/types
pub async fn handle_optimization_types() -> Json<Value> {
    let types: Vec<Value> = OptimizationGoal::ALL
        .iter()
        .map(|goal| json!({ "type": goal.as_str(), "description": goal.description() }))
        .collect();
    Json(json!({ "types": types }))
}

/// POST /validate
///
/// Advisory well-formedness check. The query parameter wins when both
/// transports carry a prompt; the body is only consulted without one. A
/// body that is present but unparseable is reported as a parse error, not
/// as a missing prompt.
pub async fn handle_validate(
    Query(query): Query<ValidateParams>,
    body: Result<Json<ValidateParams>, JsonRejection>,
) -> Result<Json<ValidationReport>, AppError> {
    let prompt = match (query.prompt, body) {
        (Some(prompt), _) => prompt,
        (None, Ok(Json(params))) => params.prompt.ok_or_else(missing_prompt)?,
        // No JSON body was sent at all.
        (None, Err(JsonRejection::MissingJsonContentType(_))) => return Err(missing_prompt()),
        (None, Err(rejection)) => {
            return Err(AppError::Validation(format!(
                "invalid JSON body: {}",
                rejection.body_text()
            )))
        }
    };

    Ok(Json(validate_prompt(&prompt)))
}

fn missing_prompt() -> AppError {
    AppError::Validation("prompt is required (query parameter or JSON body)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_optimization_types_lists_all_goals() {
        let Json(value) = handle_optimization_types().await;
        let types = value["types"].as_array().unwrap();
        assert_eq!(types.len(), 5);
        assert_eq!(types[0]["type"], "general");
        assert_eq!(
            types[0]["description"],
            "General optimization for clarity and effectiveness"
        );
        assert_eq!(types[4]["type"], "specificity");
    }

    #[tokio::test]
    async fn test_validate_reads_query_parameter() {
        let result = handle_validate(
            Query(ValidateParams {
                prompt: Some("Explain quicksort".to_string()),
            }),
            Ok(Json(ValidateParams::default())),
        )
        .await
        .unwrap();
        assert!(result.0.is_valid);
    }

    #[tokio::test]
    async fn test_validate_reads_json_body() {
        let result = handle_validate(
            Query(ValidateParams::default()),
            Ok(Json(ValidateParams {
                prompt: Some("!!!???".to_string()),
            })),
        )
        .await
        .unwrap();
        assert!(!result.0.is_valid);
        assert_eq!(
            result.0.issues,
            vec!["Prompt contains no alphanumeric characters"]
        );
    }

    #[tokio::test]
    async fn test_validate_query_wins_over_body() {
        let result = handle_validate(
            Query(ValidateParams {
                prompt: Some("Explain quicksort".to_string()),
            }),
            Ok(Json(ValidateParams {
                prompt: Some("!!!".to_string()),
            })),
        )
        .await
        .unwrap();
        assert!(result.0.is_valid, "query parameter takes precedence");
    }

    #[tokio::test]
    async fn test_validate_without_prompt_is_rejected() {
        let err = handle_validate(
            Query(ValidateParams::default()),
            Ok(Json(ValidateParams::default())),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
