//! Advisory prompt validation — surfaces well-formedness issues.
//!
//! Advisory only: the optimize and generate pipelines never consult this
//! check, and a prompt with issues is still accepted by them.

use serde::Serialize;

const MIN_PROMPT_CHARS: usize = 3;
const MAX_PROMPT_CHARS: usize = 4000;

/// Wire shape of the `POST /validate` response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Checks prompt well-formedness. Lengths count characters, not bytes.
pub fn validate_prompt(prompt: &str) -> ValidationReport {
    let mut issues = Vec::new();

    let chars = prompt.chars().count();
    if chars < MIN_PROMPT_CHARS {
        issues.push("Prompt is too short".to_string());
    }
    if chars > MAX_PROMPT_CHARS {
        issues.push("Prompt is too long".to_string());
    }
    if !prompt.chars().any(char::is_alphanumeric) {
        issues.push("Prompt contains no alphanumeric characters".to_string());
    }

    let suggestions = if issues.is_empty() {
        Vec::new()
    } else {
        vec![
            "Be specific about what you want".to_string(),
            "Include relevant context".to_string(),
            "Use clear and concise language".to_string(),
            "Specify the desired format of the response".to_string(),
        ]
    };

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_is_too_short_and_has_no_alnum() {
        let report = validate_prompt("");
        assert!(!report.is_valid);
        assert!(report.issues.contains(&"Prompt is too short".to_string()));
        assert!(report
            .issues
            .contains(&"Prompt contains no alphanumeric characters".to_string()));
        assert_eq!(report.suggestions.len(), 4, "issues come with the fixed tips");
    }

    #[test]
    fn test_two_char_prompt_is_only_too_short() {
        let report = validate_prompt("hi");
        assert_eq!(report.issues, vec!["Prompt is too short"]);
    }

    #[test]
    fn test_overlong_prompt_is_too_long() {
        let report = validate_prompt(&"a".repeat(5000));
        assert!(!report.is_valid);
        assert_eq!(report.issues, vec!["Prompt is too long"]);
    }

    #[test]
    fn test_punctuation_only_prompt_has_no_alnum() {
        let report = validate_prompt("!!!???");
        assert!(!report.is_valid);
        assert_eq!(
            report.issues,
            vec!["Prompt contains no alphanumeric characters"]
        );
    }

    #[test]
    fn test_well_formed_prompt_passes_clean() {
        let report = validate_prompt("Explain quicksort");
        assert!(report.is_valid);
        assert!(report.issues.is_empty());
        assert!(
            report.suggestions.is_empty(),
            "a clean prompt gets no suggestions"
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4000 two-byte characters: 8000 bytes but exactly at the char limit.
        let report = validate_prompt(&"é".repeat(4000));
        assert!(report.is_valid, "limit is 4000 characters, not bytes");

        let over = validate_prompt(&"é".repeat(4001));
        assert_eq!(over.issues, vec!["Prompt is too long"]);
    }
}
