use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The service is stateless per request: the only process-wide state is the
/// LLM client with its startup credential defaults.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
