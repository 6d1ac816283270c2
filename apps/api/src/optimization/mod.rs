// Prompt Optimization — rewrites user prompts against a chosen goal.
// Implements: goal templates, the optimize pipeline, advisory validation.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod goals;
pub mod handlers;
pub mod optimizer;
pub mod prompts;
pub mod validation;
