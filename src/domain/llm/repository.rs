//! Catalog repository trait

use async_trait::async_trait;

use super::{Llm, LlmId};
use crate::domain::DomainError;

/// Read-only repository over the LLM catalog.
///
/// The catalog is constant for the process lifetime; there are no create,
/// update or delete operations.
#[async_trait]
pub trait CatalogRepository: Send + Sync + std::fmt::Debug {
    /// Get a record by ID
    async fn get(&self, id: &LlmId) -> Result<Option<Llm>, DomainError>;

    /// Get the full catalog in its fixed order
    async fn list(&self) -> Result<Vec<Llm>, DomainError>;

    /// Get the fixed list of known category/tag strings
    async fn categories(&self) -> Result<Vec<String>, DomainError>;
}

/// In-memory implementation of CatalogRepository
pub mod in_memory {
    use super::*;

    /// In-memory catalog backed by an ordered sequence.
    ///
    /// A Vec rather than a map: catalog order is part of the API contract
    /// and the collection is small and read-only.
    #[derive(Debug, Default)]
    pub struct InMemoryCatalogRepository {
        llms: Vec<Llm>,
        categories: Vec<String>,
    }

    impl InMemoryCatalogRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_llm(mut self, llm: Llm) -> Self {
            self.llms.push(llm);
            self
        }

        pub fn with_llms(mut self, llms: Vec<Llm>) -> Self {
            self.llms.extend(llms);
            self
        }

        pub fn with_categories(mut self, categories: Vec<String>) -> Self {
            self.categories = categories;
            self
        }
    }

    #[async_trait]
    impl CatalogRepository for InMemoryCatalogRepository {
        async fn get(&self, id: &LlmId) -> Result<Option<Llm>, DomainError> {
            Ok(self.llms.iter().find(|llm| llm.id() == id).cloned())
        }

        async fn list(&self) -> Result<Vec<Llm>, DomainError> {
            Ok(self.llms.clone())
        }

        async fn categories(&self) -> Result<Vec<String>, DomainError> {
            Ok(self.categories.clone())
        }
    }
}
