//! Catalog service - query operations over the LLM catalog

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{
    CatalogFilter, CatalogRepository, CostProjection, DomainError, Llm, LlmId,
};

/// Composite categories response: the fixed category list plus the
/// dedicated ChatGPT model section.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesComposite {
    pub categories: Vec<String>,
    pub chatgpt: Vec<Llm>,
}

/// Read-only query service over a catalog repository.
///
/// Every operation is a pure function of the repository snapshot; nothing
/// here mutates state.
#[derive(Debug)]
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List catalog records surviving all active filter stages, in
    /// catalog order.
    pub async fn list(&self, filter: &CatalogFilter) -> Result<Vec<Llm>, DomainError> {
        let catalog = self.repository.list().await?;
        Ok(filter.apply(catalog))
    }

    /// Get a record by ID.
    ///
    /// An id that fails format validation cannot name any record, so it
    /// resolves to `None` rather than an error.
    pub async fn get(&self, id: &str) -> Result<Option<Llm>, DomainError> {
        let Ok(llm_id) = LlmId::new(id) else {
            return Ok(None);
        };
        self.repository.get(&llm_id).await
    }

    /// Get the fixed list of known categories
    pub async fn categories(&self) -> Result<Vec<String>, DomainError> {
        self.repository.categories().await
    }

    /// Get the composite categories response with the ChatGPT section
    pub async fn categories_composite(&self) -> Result<CategoriesComposite, DomainError> {
        let categories = self.repository.categories().await?;
        let chatgpt = self.chatgpt_models().await?;

        Ok(CategoriesComposite { categories, chatgpt })
    }

    /// Records classified as ChatGPT models, in catalog order
    pub async fn chatgpt_models(&self) -> Result<Vec<Llm>, DomainError> {
        let catalog = self.repository.list().await?;
        Ok(catalog.into_iter().filter(|llm| llm.is_chatgpt()).collect())
    }

    /// Cost comparison projection, one entry per record, in catalog order
    pub async fn cost_comparison(&self) -> Result<Vec<CostProjection>, DomainError> {
        let catalog = self.repository.list().await?;
        Ok(catalog.iter().map(CostProjection::from_llm).collect())
    }
}
