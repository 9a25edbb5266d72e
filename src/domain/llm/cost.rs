//! Cost comparison projection

use serde::{Deserialize, Serialize};

use super::Llm;

/// Reduced view of a catalog record for cost comparison tables/charts.
///
/// A strict structural subset of the record's identity and cost fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostProjection {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub price: f64,
    pub pricing_model: String,
}

impl CostProjection {
    /// Project a full record down to its cost comparison view
    pub fn from_llm(llm: &Llm) -> Self {
        Self {
            id: llm.id().to_string(),
            name: llm.name().to_string(),
            provider: llm.provider().to_string(),
            price: llm.cost().price,
            pricing_model: llm.cost().pricing_model.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::{Cost, LlmId};

    #[test]
    fn test_projection_fields() {
        let llm = Llm::new(
            LlmId::new("llm-1").unwrap(),
            "OpenAI GPT-4",
            "OpenAI",
            Cost::new("per 1K tokens", 0.06, "USD"),
        )
        .with_features(vec!["cloud".into()])
        .with_documentation_url("https://platform.openai.com/docs/guides/gpt");

        let projection = CostProjection::from_llm(&llm);
        assert_eq!(projection.id, "llm-1");
        assert_eq!(projection.name, "OpenAI GPT-4");
        assert_eq!(projection.provider, "OpenAI");
        assert_eq!(projection.price, 0.06);
        assert_eq!(projection.pricing_model, "per 1K tokens");
    }

    #[test]
    fn test_projection_serializes_exactly_five_fields() {
        let llm = Llm::new(
            LlmId::new("llm-2").unwrap(),
            "Anthropic Claude 2",
            "Anthropic",
            Cost::new("per 1M tokens", 8.00, "USD"),
        );

        let json = serde_json::to_value(CostProjection::from_llm(&llm)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 5);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("name"));
        assert!(object.contains_key("provider"));
        assert!(object.contains_key("price"));
        assert!(object.contains_key("pricingModel"));
    }
}
