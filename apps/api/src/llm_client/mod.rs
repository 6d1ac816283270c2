//! LLM Client — the single point of entry for all chat-completion calls.
//!
//! ARCHITECTURAL RULE: No other module may call the provider API directly.
//! All LLM interactions MUST go through this module.
//!
//! The provider is any OpenAI-compatible `/chat/completions` endpoint. The
//! base URL and credential are resolved per call: request override first,
//! startup default second.

use reqwest::Client;
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod catalog;

/// Sampling temperature for every optimization and generation call.
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no API key available: set OPENAI_API_KEY or pass api_key in the request")]
    MissingApiKey,

    #[error("LLM returned empty content")]
    EmptyContent,

    /// The response body is not JSON at all. Normalizers intercept this
    /// variant and substitute defaults; it never reaches a caller.
    #[error("LLM response is not valid JSON: {0}")]
    Malformed(serde_json::Error),

    /// The response parsed as JSON but a required field is absent or has
    /// the wrong shape.
    #[error("LLM response violates the requested schema: {0}")]
    MissingField(serde_json::Error),
}

/// Request-side contract for structured output: a named JSON schema the
/// provider is asked to honor. The provider may still return anything.
#[derive(Debug)]
pub struct ResponseSchema {
    pub name: &'static str,
    pub schema: Value,
}

/// One chat-completion call: a system + user message pair, the caller's
/// model and token limit, and optional per-request credential overrides.
#[derive(Debug)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    pub schema: ResponseSchema,
    pub api_key: Option<&'a str>,
    pub base_url: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    response_format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
    json_schema: JsonSchemaSpec<'a>,
}

#[derive(Debug, Serialize)]
struct JsonSchemaSpec<'a> {
    name: &'a str,
    schema: &'a Value,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client used by both service layers.
///
/// Holds the startup defaults; carries no retry, timeout, or rate-limit
/// logic — a provider failure propagates to the caller as one error.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    default_api_key: Option<String>,
    default_base_url: String,
}

impl LlmClient {
    pub fn new(default_api_key: Option<String>, default_base_url: String) -> Self {
        Self {
            client: Client::new(),
            default_api_key,
            default_base_url,
        }
    }

    /// Performs one chat-completion call and returns the assistant message
    /// content as raw text. Callers decide how to decode it.
    pub async fn complete(&self, request: ChatRequest<'_>) -> Result<String, LlmError> {
        let api_key = request
            .api_key
            .or(self.default_api_key.as_deref())
            .ok_or(LlmError::MissingApiKey)?;
        let base_url = request.base_url.unwrap_or(&self.default_base_url);
        let url = chat_completions_url(base_url);

        let body = ApiRequest {
            model: request.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: request.system,
                },
                ApiMessage {
                    role: "user",
                    content: request.user,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: TEMPERATURE,
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaSpec {
                    name: request.schema.name,
                    schema: &request.schema.schema,
                },
            },
        };

        debug!("Sending chat completion to {url} (model: {})", request.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's own message when the body carries the
            // OpenAI error envelope; otherwise pass the body through.
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let api_response: ApiResponse = response.json().await?;
        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)?;

        debug!("Chat completion succeeded ({} chars)", content.len());

        Ok(content)
    }
}

/// Decodes structured LLM output in two stages so callers can tell a body
/// that is not JSON (`Malformed` — recoverable by defaults) from valid JSON
/// that does not match the requested schema (`MissingField` — a hard error).
pub fn decode_structured<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let value: Value = serde_json::from_str(text).map_err(LlmError::Malformed)?;
    serde_json::from_value(value).map_err(LlmError::MissingField)
}

fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// Default confidence when the model omits the score.
pub fn default_confidence() -> f64 {
    0.8
}

/// Accepts a confidence score as either a JSON number or a numeric string.
/// The requested schema declares a string, but models return both shapes.
pub fn deserialize_confidence<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("confidence_score is not numeric: {s:?}"))),
    }
}
