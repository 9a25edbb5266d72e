//! LLM catalog entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_llm_id, LlmValidationError};

/// LLM identifier - alphanumeric + hyphens, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LlmId(String);

impl LlmId {
    /// Create a new LlmId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, LlmValidationError> {
        let id = id.into();
        validate_llm_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LlmId {
    type Error = LlmValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LlmId> for String {
    fn from(id: LlmId) -> Self {
        id.0
    }
}

impl std::fmt::Display for LlmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pricing information attached to a catalog record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    /// Billing unit, e.g. "per 1K tokens"
    pub pricing_model: String,

    /// Price per billing unit, non-negative
    pub price: f64,

    /// ISO currency code
    pub currency: String,
}

impl Cost {
    pub fn new(pricing_model: impl Into<String>, price: f64, currency: impl Into<String>) -> Self {
        Self {
            pricing_model: pricing_model.into(),
            price,
            currency: currency.into(),
        }
    }
}

/// One LLM offering in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Llm {
    /// Unique identifier, stable across lookups
    id: LlmId,

    /// Display name
    name: String,

    /// Owning organization
    provider: String,

    /// Category/capability tags
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<Vec<String>>,

    /// Free-form usability notes
    #[serde(skip_serializing_if = "Option::is_none")]
    usability: Option<Vec<String>>,

    /// Pricing information
    cost: Cost,

    /// Link to provider documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation_url: Option<String>,

    /// Explicit classification, e.g. "chatgpt"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

impl Llm {
    /// Create a new Llm with required fields
    pub fn new(id: LlmId, name: impl Into<String>, provider: impl Into<String>, cost: Cost) -> Self {
        Self {
            id,
            name: name.into(),
            provider: provider.into(),
            features: None,
            usability: None,
            cost,
            documentation_url: None,
            kind: None,
        }
    }

    /// Builder-style method to set feature tags
    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = Some(features);
        self
    }

    /// Builder-style method to set usability notes
    pub fn with_usability(mut self, usability: Vec<String>) -> Self {
        self.usability = Some(usability);
        self
    }

    /// Builder-style method to set the documentation URL
    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    /// Builder-style method to set the explicit classification
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    // Getters

    pub fn id(&self) -> &LlmId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn features(&self) -> Option<&[String]> {
        self.features.as_deref()
    }

    pub fn usability(&self) -> Option<&[String]> {
        self.usability.as_deref()
    }

    pub fn cost(&self) -> &Cost {
        &self.cost
    }

    pub fn documentation_url(&self) -> Option<&str> {
        self.documentation_url.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Whether this record belongs to the ChatGPT family.
    ///
    /// A record qualifies via an explicit `type`, a `chatgpt` feature tag,
    /// or a "gpt" substring in its display name.
    pub fn is_chatgpt(&self) -> bool {
        if let Some(kind) = &self.kind {
            if kind.to_lowercase().contains("chatgpt") {
                return true;
            }
        }

        if let Some(features) = &self.features {
            if features.iter().any(|f| f.eq_ignore_ascii_case("chatgpt")) {
                return true;
            }
        }

        self.name.to_lowercase().contains("gpt")
    }
}
