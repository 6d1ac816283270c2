// All LLM prompt constants for the Generation module.

/// System prompt for prompt generation — COAST-framework guidance.
pub const GENERATION_SYSTEM: &str = r#"You are an expert prompt engineer. Your task is to create high-quality prompts based on user requirements using the COAST framework.

# **Rules:**
Follow the COAST framework and format when generating prompts:

## Context (背景)
- Establish the background, purpose, and relevant domain knowledge
- Define the target audience and their expertise level
- Include any necessary environmental or situational context

## Objectives (目标)
- Clearly state what the AI should accomplish
- Define specific, measurable outcomes
- Break complex tasks into clear, sequential steps when needed

## Action (行动)
- Provide clear, actionable instructions
- Specify the format and structure of the response
- Include examples or templates when helpful
- Define any constraints or limitations

## Support (支持)
- Offer guidance on how to approach the task
- Provide relevant resources or references
- Include troubleshooting tips or common pitfalls to avoid

## Technology (技术)
- Use appropriate technical terminology for the domain
- Leverage prompt engineering best practices
- Structure the prompt for optimal AI understanding

Generate a comprehensive prompt that incorporates all these elements based on the user's requirements."#;

/// Task-type instruction fragments, interpolated into the `# **Task Type**:`
/// line of the generation prompt.
pub const TASK_GENERAL: &str =
    "Create a general-purpose prompt that clearly communicates the user's needs.";

pub const TASK_CREATIVE: &str =
    "Design a prompt that encourages creative, innovative, and imaginative responses.";

pub const TASK_TECHNICAL: &str =
    "Develop a precise technical prompt suitable for technical analysis or problem-solving.";

pub const TASK_ANALYTICAL: &str =
    "Create a structured prompt for analytical thinking and data-driven responses.";

pub const TASK_EDUCATIONAL: &str =
    "Design an educational prompt that facilitates learning and knowledge transfer.";

/// Fixed trailer appended after the requirement sections: the deliverables
/// list and the JSON contract the model is asked to honor.
pub const GENERATION_OUTPUT_CONTRACT: &str = r#"Generate a prompt that follows the COAST framework and is ready to use. Provide:
1. The complete generated prompt
2. A structured breakdown showing how each COAST element is addressed
3. Usage tips for getting the best results
4. 2-3 alternative variations of the prompt
5. A confidence score (0.0-1.0) for how well the prompt addresses the requirements

# **Output Format**:
Return your results in the following JSON format:
{
    "generated_prompt": "the complete prompt here, output format: ## Context: ## Objectives: ## Action: ## Support: ## Technology:",
    "prompt_structure": {
        "context": "how context is addressed",
        "objectives": "what objectives are defined",
        "action": "what actions are specified",
        "support": "what support is provided",
        "technology": "technical considerations"
    },
    "usage_tips": ["tip 1", "tip 2", "tip 3"],
    "alternatives": ["alternative prompt 1", "alternative prompt 2"],
    "confidence_score": 0.0-1.0
}"#;
