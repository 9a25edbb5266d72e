use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::catalog;
use super::health;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Catalog API
        .route("/llms", get(catalog::list_llms))
        .route("/llms/{id}", get(catalog::get_llm))
        .route("/categories", get(catalog::list_categories))
        .route("/cost-comparison", get(catalog::cost_comparison))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
