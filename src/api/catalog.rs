//! Catalog endpoint handlers

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::{AppState, CatalogServiceTrait};
use crate::api::types::ApiError;
use crate::domain::{CatalogFilter, CostProjection, Llm};

/// Query parameters for the categories endpoint.
///
/// The original API contract compares the flag against the literal string
/// "true"; anything else falls back to the plain category list.
#[derive(Debug, Deserialize)]
pub struct CategoriesQueryParams {
    #[serde(rename = "includeChatGpt")]
    pub include_chat_gpt: Option<String>,
}

impl CategoriesQueryParams {
    fn wants_chatgpt_section(&self) -> bool {
        self.include_chat_gpt.as_deref() == Some("true")
    }
}

/// GET /llms
pub async fn list_llms(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilter>,
) -> Result<Json<Vec<Llm>>, ApiError> {
    debug!(
        search = ?filter.search,
        category = ?filter.category,
        provider = ?filter.provider,
        "Listing LLM catalog"
    );

    let llms = state.catalog_service.list(&filter).await?;

    Ok(Json(llms))
}

/// GET /llms/{id}
pub async fn get_llm(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Llm>, ApiError> {
    debug!(llm_id = %id, "Getting LLM");

    let llm = state
        .catalog_service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("LLM not found"))?;

    Ok(Json(llm))
}

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<CategoriesQueryParams>,
) -> Result<Response, ApiError> {
    debug!(
        include_chatgpt = params.wants_chatgpt_section(),
        "Listing categories"
    );

    if params.wants_chatgpt_section() {
        let composite = state.catalog_service.categories_composite().await?;
        Ok(Json(composite).into_response())
    } else {
        let categories = state.catalog_service.categories().await?;
        Ok(Json(categories).into_response())
    }
}

/// GET /cost-comparison
pub async fn cost_comparison(
    State(state): State<AppState>,
) -> Result<Json<Vec<CostProjection>>, ApiError> {
    debug!("Listing cost comparison data");

    let data = state.catalog_service.cost_comparison().await?;

    Ok(Json(data))
}
