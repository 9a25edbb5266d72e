//! LLM Catalog API
//!
//! A REST API over a static, in-memory catalog of LLM offerings:
//! - listing with free-text search, category and provider filters
//! - single-record lookup by ID
//! - category enumeration, with an optional ChatGPT composite section
//! - cost comparison projections for tables and charts

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::InMemoryCatalogRepository;
use infrastructure::catalog::{seed_catalog, seed_categories};
use infrastructure::services::CatalogService;

/// Build the application state with the built-in catalog.
///
/// The catalog is seeded once here and is read-only afterwards; every
/// request sees the same snapshot.
pub fn create_app_state() -> AppState {
    let repository = InMemoryCatalogRepository::new()
        .with_llms(seed_catalog())
        .with_categories(seed_categories());

    let catalog_service = Arc::new(CatalogService::new(Arc::new(repository)));

    AppState::new(catalog_service)
}
