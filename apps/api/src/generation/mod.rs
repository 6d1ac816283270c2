// Prompt Generation — builds ready-to-use prompts from user requirements.
// Implements: task-type selection, the generate pipeline, format listings.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod task_types;
