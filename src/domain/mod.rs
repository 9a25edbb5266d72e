//! Domain layer - Core business logic and entities

pub mod error;
pub mod llm;

pub use error::DomainError;
pub use llm::{
    validate_llm_id, validate_price, CatalogFilter, CatalogRepository, Cost, CostProjection,
    InMemoryCatalogRepository, Llm, LlmId, LlmValidationError,
};
