//! Model catalog — the advertised model list and its pricing rule.
//!
//! The catalog is informational only: optimization and generation accept any
//! model name and forward it to the provider untouched. Nothing routes
//! through this table.

use serde::Serialize;

/// Token limit and per-1k-token pricing derived from a model name.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelPricing {
    pub input: f64,
    pub output: f64,
}

/// One catalog entry in the wire shape of `GET /models`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub model_name: &'static str,
    pub description: &'static str,
    pub max_tokens: u32,
    pub pricing_per_1k_tokens: ModelPricing,
}

/// The advertised model names and blurbs.
const CATALOG: &[(&str, &str)] = &[
    ("gpt-4.1", "Latest GPT-4.1 model with enhanced capabilities"),
    ("gpt-4o", "GPT-4 Omni - multimodal capabilities"),
    ("gpt-4.1-mini", "GPT-4.1 Mini - cost-effective GPT-4.1 variant"),
    ("gpt-4o-mini", "GPT-4 Omni Mini - fast and cost-effective"),
];

/// Pricing rule: "3.5"-family names get the small context and legacy
/// pricing, everything else gets the GPT-4 tier.
pub fn derive_limits(model_name: &str) -> (u32, ModelPricing) {
    if model_name.contains("3.5") {
        (
            4096,
            ModelPricing {
                input: 0.0015,
                output: 0.002,
            },
        )
    } else {
        (
            8192,
            ModelPricing {
                input: 0.03,
                output: 0.06,
            },
        )
    }
}

/// Returns the full catalog with limits and pricing applied.
pub fn available_models() -> Vec<ModelInfo> {
    CATALOG
        .iter()
        .map(|&(name, description)| {
            let (max_tokens, pricing) = derive_limits(name);
            ModelInfo {
                model_name: name,
                description,
                max_tokens,
                pricing_per_1k_tokens: pricing,
            }
        })
        .collect()
}

/// Looks up a single catalog entry by exact name.
pub fn find_model(model_name: &str) -> Option<ModelInfo> {
    available_models()
        .into_iter()
        .find(|m| m.model_name == model_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_four_models() {
        let models = available_models();
        assert_eq!(models.len(), 4, "catalog must advertise exactly 4 models");
        assert_eq!(models[0].model_name, "gpt-4.1");
        assert_eq!(models[1].model_name, "gpt-4o");
        assert_eq!(models[2].model_name, "gpt-4.1-mini");
        assert_eq!(models[3].model_name, "gpt-4o-mini");
    }

    #[test]
    fn test_gpt_35_gets_legacy_tier() {
        let (max_tokens, pricing) = derive_limits("gpt-3.5-turbo");
        assert_eq!(max_tokens, 4096);
        assert_eq!(pricing.input, 0.0015);
        assert_eq!(pricing.output, 0.002);
    }

    #[test]
    fn test_gpt_4_family_gets_standard_tier() {
        let (max_tokens, pricing) = derive_limits("gpt-4.1");
        assert_eq!(max_tokens, 8192);
        assert_eq!(pricing.input, 0.03);
        assert_eq!(pricing.output, 0.06);

        let (mini_tokens, _) = derive_limits("gpt-4o-mini");
        assert_eq!(mini_tokens, 8192, "rule keys on \"3.5\", not on \"mini\"");
    }

    #[test]
    fn test_find_model_exact_match_only() {
        assert!(find_model("gpt-4o").is_some());
        assert!(
            find_model("gpt-4").is_none(),
            "lookup must not prefix-match model names"
        );
        assert!(find_model("GPT-4o").is_none(), "lookup is case-sensitive");
    }

    #[test]
    fn test_catalog_serializes_wire_shape() {
        let models = available_models();
        let value = serde_json::to_value(&models[0]).unwrap();
        assert_eq!(value["model_name"], "gpt-4.1");
        assert_eq!(value["max_tokens"], 8192);
        assert_eq!(value["pricing_per_1k_tokens"]["input"], 0.03);
        assert_eq!(value["pricing_per_1k_tokens"]["output"], 0.06);
    }
}
