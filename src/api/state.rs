//! Application state for shared services

use std::sync::Arc;

use crate::domain::{CatalogFilter, CatalogRepository, CostProjection, DomainError, Llm};
use crate::infrastructure::services::{CatalogService, CategoriesComposite};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<dyn CatalogServiceTrait>,
}

/// Trait for catalog query operations
#[async_trait::async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    async fn list(&self, filter: &CatalogFilter) -> Result<Vec<Llm>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<Llm>, DomainError>;
    async fn categories(&self) -> Result<Vec<String>, DomainError>;
    async fn categories_composite(&self) -> Result<CategoriesComposite, DomainError>;
    async fn cost_comparison(&self) -> Result<Vec<CostProjection>, DomainError>;
}

#[async_trait::async_trait]
impl<R: CatalogRepository + 'static> CatalogServiceTrait for CatalogService<R> {
    async fn list(&self, filter: &CatalogFilter) -> Result<Vec<Llm>, DomainError> {
        CatalogService::list(self, filter).await
    }

    async fn get(&self, id: &str) -> Result<Option<Llm>, DomainError> {
        CatalogService::get(self, id).await
    }

    async fn categories(&self) -> Result<Vec<String>, DomainError> {
        CatalogService::categories(self).await
    }

    async fn categories_composite(&self) -> Result<CategoriesComposite, DomainError> {
        CatalogService::categories_composite(self).await
    }

    async fn cost_comparison(&self) -> Result<Vec<CostProjection>, DomainError> {
        CatalogService::cost_comparison(self).await
    }
}

impl AppState {
    /// Create new application state with the provided catalog service
    pub fn new(catalog_service: Arc<dyn CatalogServiceTrait>) -> Self {
        Self { catalog_service }
    }
}
