//! Task types and output formats — the closed sets for prompt generation.
//!
//! Unlike optimization goals, task type lookup is strict: an unknown key is
//! rejected with a validation error before any external call is made.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::generation::prompts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskType {
    #[default]
    General,
    Creative,
    Technical,
    Analytical,
    Educational,
}

impl TaskType {
    pub const ALL: [TaskType; 5] = [
        Self::General,
        Self::Creative,
        Self::Technical,
        Self::Analytical,
        Self::Educational,
    ];

    /// Strict lookup. `None` means the caller must reject the request.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "general" => Some(Self::General),
            "creative" => Some(Self::Creative),
            "technical" => Some(Self::Technical),
            "analytical" => Some(Self::Analytical),
            "educational" => Some(Self::Educational),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Creative => "creative",
            Self::Technical => "technical",
            Self::Analytical => "analytical",
            Self::Educational => "educational",
        }
    }

    /// Blurb shown by `GET /task-types`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::General => "General-purpose prompts for various tasks",
            Self::Creative => "Prompts for creative writing, brainstorming, and innovation",
            Self::Technical => "Prompts for technical tasks, coding, and problem-solving",
            Self::Analytical => "Prompts for data analysis, research, and critical thinking",
            Self::Educational => "Prompts for teaching, learning, and knowledge sharing",
        }
    }

    /// Instruction fragment injected into the generation prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::General => prompts::TASK_GENERAL,
            Self::Creative => prompts::TASK_CREATIVE,
            Self::Technical => prompts::TASK_TECHNICAL,
            Self::Analytical => prompts::TASK_ANALYTICAL,
            Self::Educational => prompts::TASK_EDUCATIONAL,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Desired shape of the answer the generated prompt should elicit. Closed
/// serde enum: an out-of-set value fails body deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    List,
    Structured,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [Self::Text, Self::Json, Self::List, Self::Structured];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::List => "list",
            Self::Structured => "structured",
        }
    }

    /// Blurb shown by `GET /output-formats`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Text => "Free-form text response",
            Self::Json => "Structured JSON format",
            Self::List => "Numbered or bulleted list",
            Self::Structured => "Specific structured format with sections",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
