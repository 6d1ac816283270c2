//! Prompt generation — orchestrates the generate pipeline.
//!
//! Flow: resolve task type (strict) → compose instruction → LLM call →
//!       normalize → typed response.
//!
//! The COAST breakdown in the response is a fixed five-part structure; a
//! JSON payload missing any of the five parts is an upstream failure, while
//! a body that is not JSON at all degrades to the raw-text fallback.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{GENERATION_OUTPUT_CONTRACT, GENERATION_SYSTEM};
use crate::generation::task_types::{OutputFormat, TaskType};
use crate::llm_client::{
    decode_structured, default_confidence, deserialize_confidence, ChatRequest, LlmClient,
    LlmError, ResponseSchema,
};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub requirements: String,
    /// Strict task-type key; unknown values are rejected with a 400.
    #[serde(default = "default_task_type")]
    pub task_type: String,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub constraints: Option<String>,
    #[serde(default)]
    pub examples: Option<Vec<String>>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// The five-part COAST breakdown. All five parts are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptStructure {
    pub context: String,
    pub objectives: String,
    pub action: String,
    pub support: String,
    pub technology: String,
}

/// Response body for `POST /generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub generated_prompt: String,
    pub prompt_structure: PromptStructure,
    pub usage_tips: Vec<String>,
    pub alternatives: Vec<String>,
    pub model_used: String,
    pub confidence_score: f64,
}

fn default_task_type() -> String {
    TaskType::General.as_str().to_string()
}

fn default_model() -> String {
    "gpt-4.1".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

/// The shape the model is asked to return.
#[derive(Debug, Deserialize)]
struct GenerationPayload {
    generated_prompt: String,
    prompt_structure: PromptStructure,
    usage_tips: Vec<String>,
    alternatives: Vec<String>,
    #[serde(
        default = "default_confidence",
        deserialize_with = "deserialize_confidence"
    )]
    confidence_score: f64,
}

fn generation_schema() -> ResponseSchema {
    ResponseSchema {
        name: "prompt_generation",
        schema: json!({
            "type": "object",
            "properties": {
                "generated_prompt": { "type": "string" },
                "prompt_structure": {
                    "type": "object",
                    "properties": {
                        "context": { "type": "string" },
                        "objectives": { "type": "string" },
                        "action": { "type": "string" },
                        "support": { "type": "string" },
                        "technology": { "type": "string" }
                    },
                    "required": ["context", "objectives", "action", "support", "technology"]
                },
                "usage_tips": { "type": "array", "items": { "type": "string" } },
                "alternatives": { "type": "array", "items": { "type": "string" } },
                "confidence_score": { "type": "string" }
            },
            "required": [
                "generated_prompt",
                "prompt_structure",
                "usage_tips",
                "alternatives",
                "confidence_score"
            ]
        }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full generation pipeline.
///
/// Steps:
/// 1. Reject empty requirements before any network cost.
/// 2. Resolve the task type — strict, unknown keys are a validation error.
/// 3. Compose the requirement sections and the fixed output contract.
/// 4. One chat-completion call, structured output requested.
/// 5. Normalize: strict decode, raw-text fallback for non-JSON bodies.
pub async fn generate_prompt(
    llm: &LlmClient,
    request: GenerateRequest,
) -> Result<GenerateResponse, AppError> {
    if request.requirements.trim().is_empty() {
        return Err(AppError::Validation(
            "Requirements must not be empty".to_string(),
        ));
    }

    let task_type = TaskType::from_key(&request.task_type).ok_or_else(|| {
        AppError::Validation(format!(
            "Unknown task_type {:?}; expected one of: general, creative, technical, analytical, educational",
            request.task_type
        ))
    })?;

    let instruction = build_instruction(task_type, &request);

    info!(
        "Generating prompt for task type {task_type} (model: {})",
        request.model
    );

    let content = llm
        .complete(ChatRequest {
            model: &request.model,
            system: GENERATION_SYSTEM,
            user: &instruction,
            max_tokens: request.max_tokens,
            schema: generation_schema(),
            api_key: request.api_key.as_deref(),
            base_url: request.base_url.as_deref(),
        })
        .await?;

    let payload = normalize(&content)?;

    Ok(GenerateResponse {
        generated_prompt: payload.generated_prompt,
        prompt_structure: payload.prompt_structure,
        usage_tips: payload.usage_tips,
        alternatives: payload.alternatives,
        model_used: request.model,
        confidence_score: payload.confidence_score,
    })
}

/// Builds the user-role instruction: requirements header, task-type fragment,
/// output format, the optional sections, then the fixed output contract.
fn build_instruction(task_type: TaskType, request: &GenerateRequest) -> String {
    let mut instruction = format!(
        "Based on the following requirements, generate a high-quality prompt:\n\n\
         # **Requirements**: {}\n\n\
         # **Task Type**: {}\n\
         # **Output Format**: {}\n\n",
        request.requirements,
        task_type.instruction(),
        request.output_format,
    );

    if let Some(context) = request.context.as_deref().filter(|c| !c.is_empty()) {
        instruction.push_str(&format!("# **Additional Context**: {context}\n\n"));
    }

    if let Some(constraints) = request.constraints.as_deref().filter(|c| !c.is_empty()) {
        instruction.push_str(&format!("# **Constraints**: {constraints}\n\n"));
    }

    if let Some(examples) = request.examples.as_deref().filter(|e| !e.is_empty()) {
        instruction.push_str(&format!("# **Examples**: {}\n\n", examples.join(", ")));
    }

    instruction.push_str(GENERATION_OUTPUT_CONTRACT);
    instruction
}

fn normalize(content: &str) -> Result<GenerationPayload, AppError> {
    match decode_structured::<GenerationPayload>(content) {
        Ok(payload) => Ok(payload),
        Err(LlmError::Malformed(_)) => {
            warn!("Generation response is not JSON; returning raw text with fallback structure");
            Ok(GenerationPayload {
                generated_prompt: content.to_string(),
                prompt_structure: PromptStructure {
                    context: "Based on user requirements".to_string(),
                    objectives: "Address the specified task".to_string(),
                    action: "Follow instructions provided".to_string(),
                    support: "General guidance included".to_string(),
                    technology: "Standard prompt engineering".to_string(),
                },
                usage_tips: vec![
                    "Review the prompt for clarity".to_string(),
                    "Test with sample inputs".to_string(),
                    "Adjust based on results".to_string(),
                ],
                alternatives: vec![
                    "Simplified version of the prompt".to_string(),
                    "More detailed version of the prompt".to_string(),
                ],
                confidence_score: 0.7,
            })
        }
        Err(e) => Err(e.into()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_request(requirements: &str) -> GenerateRequest {
        serde_json::from_value(json!({ "requirements": requirements })).unwrap()
    }

    fn full_payload() -> serde_json::Value {
        json!({
            "generated_prompt": "## Context: ...",
            "prompt_structure": {
                "context": "c",
                "objectives": "o",
                "action": "a",
                "support": "s",
                "technology": "t"
            },
            "usage_tips": ["tip"],
            "alternatives": ["alt 1", "alt 2"],
            "confidence_score": "0.9"
        })
    }

    #[test]
    fn test_request_defaults() {
        let request = minimal_request("I need a code review prompt");
        assert_eq!(request.task_type, "general");
        assert_eq!(request.output_format, OutputFormat::Text);
        assert_eq!(request.model, "gpt-4.1");
        assert_eq!(request.max_tokens, 1000);
    }

    #[test]
    fn test_request_rejects_unknown_output_format() {
        let result = serde_json::from_value::<GenerateRequest>(json!({
            "requirements": "r",
            "output_format": "markdown"
        }));
        assert!(result.is_err(), "out-of-set output_format must fail the body");
    }

    #[test]
    fn test_instruction_carries_all_sections() {
        let mut request = minimal_request("I need a code review prompt");
        request.task_type = "technical".to_string();
        request.output_format = OutputFormat::List;
        request.context = Some("Rust codebase".to_string());
        request.constraints = Some("under 200 words".to_string());
        request.examples = Some(vec!["example A".to_string(), "example B".to_string()]);

        let instruction = build_instruction(TaskType::Technical, &request);
        assert!(instruction.contains("# **Requirements**: I need a code review prompt"));
        assert!(instruction.contains(
            "# **Task Type**: Develop a precise technical prompt suitable for technical analysis or problem-solving."
        ));
        assert!(instruction.contains("# **Output Format**: list"));
        assert!(instruction.contains("# **Additional Context**: Rust codebase"));
        assert!(instruction.contains("# **Constraints**: under 200 words"));
        assert!(instruction.contains("# **Examples**: example A, example B"));
        assert!(
            instruction.ends_with(GENERATION_OUTPUT_CONTRACT),
            "output contract must close the instruction"
        );
    }

    #[test]
    fn test_instruction_omits_absent_sections() {
        let request = minimal_request("Summarize articles");
        let instruction = build_instruction(TaskType::General, &request);
        assert!(!instruction.contains("# **Additional Context**:"));
        assert!(!instruction.contains("# **Constraints**:"));
        assert!(!instruction.contains("# **Examples**:"));
    }

    #[test]
    fn test_normalize_decodes_full_payload() {
        let payload = normalize(&full_payload().to_string()).unwrap();
        assert_eq!(payload.generated_prompt, "## Context: ...");
        assert_eq!(payload.prompt_structure.objectives, "o");
        assert_eq!(payload.alternatives.len(), 2);
        assert!((payload.confidence_score - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_rejects_incomplete_structure() {
        let mut value = full_payload();
        value["prompt_structure"]
            .as_object_mut()
            .unwrap()
            .remove("technology");

        let err = normalize(&value.to_string()).unwrap_err();
        assert!(
            matches!(err, AppError::Upstream(_)),
            "a breakdown missing one of the five parts must be an upstream failure"
        );
    }

    #[test]
    fn test_normalize_falls_back_on_non_json_body() {
        let raw = "Sure! Here is a prompt you can use.";
        let payload = normalize(raw).unwrap();
        assert_eq!(payload.generated_prompt, raw);
        assert_eq!(payload.prompt_structure.context, "Based on user requirements");
        assert_eq!(payload.prompt_structure.technology, "Standard prompt engineering");
        assert_eq!(
            payload.usage_tips,
            vec![
                "Review the prompt for clarity",
                "Test with sample inputs",
                "Adjust based on results"
            ]
        );
        assert_eq!(
            payload.alternatives,
            vec![
                "Simplified version of the prompt",
                "More detailed version of the prompt"
            ]
        );
        assert!((payload.confidence_score - 0.7).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_unknown_task_type_rejected_before_any_call() {
        // Unreachable base URL: a network attempt would fail differently.
        let llm = LlmClient::new(Some("key".to_string()), "http://127.0.0.1:1".to_string());
        let mut request = minimal_request("Build a prompt");
        request.task_type = "conversational".to_string();

        let err = generate_prompt(&llm, request).await.unwrap_err();
        match err {
            AppError::Validation(message) => {
                assert!(message.contains("conversational"));
                assert!(message.contains("educational"), "message names the valid keys");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_requirements_rejected() {
        let llm = LlmClient::new(Some("key".to_string()), "http://127.0.0.1:1".to_string());
        let err = generate_prompt(&llm, minimal_request("  "))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    mod http_tests {
        use super::*;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        #[tokio::test]
        async fn test_generate_pipeline_end_to_end() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/chat/completions"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "id": "chatcmpl-gen",
                    "model": "gpt-4.1",
                    "choices": [{
                        "index": 0,
                        "message": {
                            "role": "assistant",
                            "content": full_payload().to_string()
                        },
                        "finish_reason": "stop"
                    }]
                })))
                .expect(1)
                .mount(&server)
                .await;

            let llm = LlmClient::new(Some("test-key".to_string()), server.uri());
            let response = generate_prompt(&llm, minimal_request("I need a code review prompt"))
                .await
                .unwrap();

            assert_eq!(response.generated_prompt, "## Context: ...");
            assert_eq!(response.model_used, "gpt-4.1");
            assert_eq!(response.prompt_structure.support, "s");
            assert!((response.confidence_score - 0.9).abs() < f64::EPSILON);
        }
    }
}
