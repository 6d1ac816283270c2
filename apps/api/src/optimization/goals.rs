//! Optimization goals — the closed set of rewriting strategies.
//!
//! Goal keys arrive as free-form strings on the wire. Lookup is total:
//! anything outside the five known keys falls back to `General`, so goal
//! resolution can never fail a request.

use std::fmt;

use crate::optimization::prompts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizationGoal {
    #[default]
    General,
    Clarity,
    Conciseness,
    Creativity,
    Specificity,
}

impl OptimizationGoal {
    pub const ALL: [OptimizationGoal; 5] = [
        Self::General,
        Self::Clarity,
        Self::Conciseness,
        Self::Creativity,
        Self::Specificity,
    ];

    /// Resolves a wire key to a goal. Unknown keys map to `General`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "clarity" => Self::Clarity,
            "conciseness" => Self::Conciseness,
            "creativity" => Self::Creativity,
            "specificity" => Self::Specificity,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Clarity => "clarity",
            Self::Conciseness => "conciseness",
            Self::Creativity => "creativity",
            Self::Specificity => "specificity",
        }
    }

    /// Blurb shown by `GET /optimization/types`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::General => "General optimization for clarity and effectiveness",
            Self::Clarity => "Focus on making the prompt clearer",
            Self::Conciseness => "Make the prompt more concise",
            Self::Creativity => "Enhance creativity and innovation",
            Self::Specificity => "Make the prompt more specific and detailed",
        }
    }

    /// The user-role instruction template for this goal. `{prompt}` is
    /// interpolated by the optimizer.
    pub fn instruction_template(&self) -> &'static str {
        match self {
            Self::General => prompts::GOAL_GENERAL,
            Self::Clarity => prompts::GOAL_CLARITY,
            Self::Conciseness => prompts::GOAL_CONCISENESS,
            Self::Creativity => prompts::GOAL_CREATIVITY,
            Self::Specificity => prompts::GOAL_SPECIFICITY,
        }
    }
}

impl fmt::Display for OptimizationGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
