//! LLM identifier validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for LLM IDs
pub const MAX_LLM_ID_LENGTH: usize = 50;

/// Regex pattern for valid LLM IDs (alphanumeric + hyphens)
static LLM_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]$|^[a-zA-Z0-9]$").unwrap());

/// LLM validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum LlmValidationError {
    /// LLM ID is empty
    EmptyId,
    /// LLM ID exceeds maximum length
    IdTooLong { length: usize, max: usize },
    /// LLM ID contains invalid characters
    InvalidIdFormat { id: String },
    /// Price is negative
    NegativePrice { value: f64 },
}

impl fmt::Display for LlmValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "LLM ID cannot be empty"),
            Self::IdTooLong { length, max } => {
                write!(f, "LLM ID too long: {} characters (max {})", length, max)
            }
            Self::InvalidIdFormat { id } => {
                write!(
                    f,
                    "Invalid LLM ID format '{}': must be alphanumeric with hyphens, cannot start or end with hyphen",
                    id
                )
            }
            Self::NegativePrice { value } => {
                write!(f, "Invalid price {}: must be non-negative", value)
            }
        }
    }
}

impl std::error::Error for LlmValidationError {}

/// Validate an LLM ID
pub fn validate_llm_id(id: &str) -> Result<(), LlmValidationError> {
    if id.is_empty() {
        return Err(LlmValidationError::EmptyId);
    }

    if id.len() > MAX_LLM_ID_LENGTH {
        return Err(LlmValidationError::IdTooLong {
            length: id.len(),
            max: MAX_LLM_ID_LENGTH,
        });
    }

    if !LLM_ID_PATTERN.is_match(id) {
        return Err(LlmValidationError::InvalidIdFormat { id: id.to_string() });
    }

    Ok(())
}

/// Validate a catalog price
pub fn validate_price(price: f64) -> Result<(), LlmValidationError> {
    if price < 0.0 {
        return Err(LlmValidationError::NegativePrice { value: price });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_llm_ids() {
        assert!(validate_llm_id("a").is_ok());
        assert!(validate_llm_id("llm-1").is_ok());
        assert!(validate_llm_id("llm-42").is_ok());
        assert!(validate_llm_id("GPT4-Turbo").is_ok());
        assert!(validate_llm_id("claude-2").is_ok());
        assert!(validate_llm_id("a1").is_ok());
        assert!(validate_llm_id("1a").is_ok());
    }

    #[test]
    fn test_invalid_llm_ids() {
        // Empty
        assert!(matches!(
            validate_llm_id(""),
            Err(LlmValidationError::EmptyId)
        ));

        // Too long
        let long_id = "a".repeat(51);
        assert!(matches!(
            validate_llm_id(&long_id),
            Err(LlmValidationError::IdTooLong { .. })
        ));

        // Invalid characters
        assert!(matches!(
            validate_llm_id("llm_1"),
            Err(LlmValidationError::InvalidIdFormat { .. })
        ));
        assert!(matches!(
            validate_llm_id("llm 1"),
            Err(LlmValidationError::InvalidIdFormat { .. })
        ));
        assert!(matches!(
            validate_llm_id("llm.1"),
            Err(LlmValidationError::InvalidIdFormat { .. })
        ));

        // Starts or ends with hyphen
        assert!(matches!(
            validate_llm_id("-llm"),
            Err(LlmValidationError::InvalidIdFormat { .. })
        ));
        assert!(matches!(
            validate_llm_id("llm-"),
            Err(LlmValidationError::InvalidIdFormat { .. })
        ));
    }

    #[test]
    fn test_max_length_llm_id() {
        let max_id = "a".repeat(50);
        assert!(validate_llm_id(&max_id).is_ok());
    }

    #[test]
    fn test_price_validation() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(0.06).is_ok());
        assert!(validate_price(8.0).is_ok());

        assert!(validate_price(-0.01).is_err());
    }
}
