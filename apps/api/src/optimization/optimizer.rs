//! Prompt optimization — orchestrates the optimize pipeline.
//!
//! Flow: resolve goal → compose instruction → LLM call → normalize →
//!       tokens-saved estimate → typed response.
//!
//! Normalization never fails on a non-JSON body: the raw text is returned
//! verbatim as the optimized prompt with fixed fallback metadata. Valid JSON
//! that misses a required field is an upstream failure.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{
    decode_structured, default_confidence, deserialize_confidence, ChatRequest, LlmClient,
    LlmError, ResponseSchema,
};
use crate::optimization::goals::OptimizationGoal;
use crate::optimization::prompts::OPTIMIZATION_SYSTEM;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /optimize`.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizeRequest {
    pub prompt: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub context: Option<String>,
    /// Free-form goal key; unknown values resolve to `general`.
    #[serde(default = "default_goal")]
    pub optimization_goal: String,
    #[serde(default)]
    pub examples: Option<Vec<String>>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Response body for `POST /optimize`.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizeResponse {
    pub original_prompt: String,
    pub optimized_prompt: String,
    pub suggestions: Vec<String>,
    pub reasoning: String,
    pub model_used: String,
    pub tokens_saved: u32,
    pub confidence_score: f64,
}

/// Request body for `POST /optimize/advanced`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvancedOptimizeRequest {
    pub prompt: String,
    pub target_model: String,
    #[serde(default = "default_goal")]
    pub optimization_type: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub examples: Option<Vec<String>>,
}

/// Response body for `POST /optimize/advanced`. Always delivered with
/// HTTP 200; failures are carried in `success`/`error`.
#[derive(Debug, Clone, Serialize)]
pub struct AdvancedOptimizeResponse {
    pub success: bool,
    pub optimized_prompt: Option<String>,
    pub suggestions: Vec<String>,
    pub error: Option<String>,
}

impl From<AdvancedOptimizeRequest> for OptimizeRequest {
    fn from(request: AdvancedOptimizeRequest) -> Self {
        OptimizeRequest {
            prompt: request.prompt,
            model: request.target_model,
            context: request.context,
            optimization_goal: request.optimization_type,
            examples: request.examples,
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

fn default_model() -> String {
    "gpt-4.1".to_string()
}

fn default_goal() -> String {
    OptimizationGoal::General.as_str().to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

/// The shape the model is asked to return. Decoded strictly after the
/// two-stage parse in `normalize`.
#[derive(Debug, Deserialize)]
struct OptimizationPayload {
    optimized_prompt: String,
    suggestions: Vec<String>,
    reasoning: String,
    #[serde(
        default = "default_confidence",
        deserialize_with = "deserialize_confidence"
    )]
    confidence_score: f64,
}

fn optimization_schema() -> ResponseSchema {
    ResponseSchema {
        name: "prompt_optimization",
        schema: json!({
            "type": "object",
            "properties": {
                "optimized_prompt": { "type": "string" },
                "suggestions": { "type": "array", "items": { "type": "string" } },
                "reasoning": { "type": "string" },
                "confidence_score": { "type": "string" }
            },
            "required": ["optimized_prompt", "suggestions", "reasoning", "confidence_score"]
        }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Optimization pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full optimization pipeline.
///
/// Steps:
/// 1. Reject an empty prompt before any network cost.
/// 2. Resolve the goal key (total fallback to `general`).
/// 3. Compose the goal instruction with context/examples sections.
/// 4. One chat-completion call, structured output requested.
/// 5. Normalize: strict decode, raw-text fallback for non-JSON bodies.
/// 6. Estimate tokens saved from word counts.
pub async fn optimize_prompt(
    llm: &LlmClient,
    request: OptimizeRequest,
) -> Result<OptimizeResponse, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt must not be empty".to_string()));
    }

    let goal = OptimizationGoal::from_key(&request.optimization_goal);
    let instruction = build_instruction(goal, &request);

    info!("Optimizing prompt with goal {goal} (model: {})", request.model);

    let content = llm
        .complete(ChatRequest {
            model: &request.model,
            system: OPTIMIZATION_SYSTEM,
            user: &instruction,
            max_tokens: request.max_tokens,
            schema: optimization_schema(),
            api_key: request.api_key.as_deref(),
            base_url: request.base_url.as_deref(),
        })
        .await?;

    let payload = normalize(&content)?;
    let tokens_saved = tokens_saved(&request.prompt, &payload.optimized_prompt);

    Ok(OptimizeResponse {
        original_prompt: request.prompt,
        optimized_prompt: payload.optimized_prompt,
        suggestions: payload.suggestions,
        reasoning: payload.reasoning,
        model_used: request.model,
        tokens_saved,
        confidence_score: payload.confidence_score,
    })
}

/// Builds the user-role instruction: goal template with the prompt
/// interpolated, then optional context and examples sections.
fn build_instruction(goal: OptimizationGoal, request: &OptimizeRequest) -> String {
    let mut instruction = goal
        .instruction_template()
        .replace("{prompt}", &request.prompt);

    if let Some(context) = request.context.as_deref().filter(|c| !c.is_empty()) {
        instruction.push_str(&format!("\n\nAdditional context / User demand: {context}"));
    }

    if let Some(examples) = request.examples.as_deref().filter(|e| !e.is_empty()) {
        instruction.push_str(&format!("\n\nExamples: {}", examples.join(", ")));
    }

    instruction
}

fn normalize(content: &str) -> Result<OptimizationPayload, AppError> {
    match decode_structured::<OptimizationPayload>(content) {
        Ok(payload) => Ok(payload),
        Err(LlmError::Malformed(_)) => {
            warn!("Optimization response is not JSON; returning raw text with fallback metadata");
            Ok(OptimizationPayload {
                optimized_prompt: content.to_string(),
                suggestions: vec!["Review the optimized prompt for clarity".to_string()],
                reasoning: "AI-generated optimization".to_string(),
                confidence_score: 0.8,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Word-count proxy for compression. Clamped at zero when the optimized
/// prompt is longer than the original.
fn tokens_saved(original: &str, optimized: &str) -> u32 {
    let original_words = original.split_whitespace().count();
    let optimized_words = optimized.split_whitespace().count();
    original_words.saturating_sub(optimized_words) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
