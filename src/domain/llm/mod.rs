//! LLM catalog domain: entities, filtering, repository

pub mod cost;
pub mod entity;
pub mod filter;
pub mod repository;
pub mod validation;

pub use cost::CostProjection;
pub use entity::{Cost, Llm, LlmId};
pub use filter::CatalogFilter;
pub use repository::{in_memory::InMemoryCatalogRepository, CatalogRepository};
pub use validation::{validate_llm_id, validate_price, LlmValidationError};
