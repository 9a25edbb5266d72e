//! Catalog filtering
//!
//! A filter is an ordered chain of up to three optional stages (search,
//! category, provider). Each stage narrows the previous stage's result;
//! absent parameters are no-op stages. Filtering preserves catalog order.

use serde::Deserialize;

use super::Llm;

/// Optional filter parameters for catalog listing.
///
/// Deserializes directly from query strings, so `?search=...&category=...`
/// maps onto this struct. Empty-string parameters behave like absent ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFilter {
    /// Free-text search over name, provider, features and usability
    pub search: Option<String>,

    /// Comma-separated category/tag list, OR semantics across tags
    pub category: Option<String>,

    /// Provider name, case-insensitive exact match
    pub provider: Option<String>,
}

impl CatalogFilter {
    /// Filter with only a search term
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    /// Filter with only a category list
    pub fn category(categories: impl Into<String>) -> Self {
        Self {
            category: Some(categories.into()),
            ..Self::default()
        }
    }

    /// Filter with only a provider
    pub fn provider(provider: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Self::default()
        }
    }

    /// Apply all active stages in fixed order, preserving input order.
    pub fn apply(&self, mut records: Vec<Llm>) -> Vec<Llm> {
        if let Some(needle) = non_empty(self.search.as_deref()) {
            let needle = needle.to_lowercase();
            records.retain(|llm| matches_search(llm, &needle));
        }

        if let Some(raw) = non_empty(self.category.as_deref()) {
            let wanted: Vec<String> = raw
                .to_lowercase()
                .split(',')
                .map(|c| c.trim().to_string())
                .collect();
            records.retain(|llm| matches_any_category(llm, &wanted));
        }

        if let Some(provider) = non_empty(self.provider.as_deref()) {
            let provider = provider.to_lowercase();
            records.retain(|llm| llm.provider().to_lowercase() == provider);
        }

        records
    }
}

/// Empty-string query values behave like absent parameters
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Case-insensitive substring match against name, provider, and the
/// comma-joined features/usability lists when present.
fn matches_search(llm: &Llm, needle: &str) -> bool {
    if llm.name().to_lowercase().contains(needle) {
        return true;
    }

    if llm.provider().to_lowercase().contains(needle) {
        return true;
    }

    if let Some(features) = llm.features() {
        if features.join(",").to_lowercase().contains(needle) {
            return true;
        }
    }

    if let Some(usability) = llm.usability() {
        if usability.join(",").to_lowercase().contains(needle) {
            return true;
        }
    }

    false
}

/// A record with no feature tags never matches a category filter.
fn matches_any_category(llm: &Llm, wanted: &[String]) -> bool {
    let Some(features) = llm.features() else {
        return false;
    };

    let features: Vec<String> = features.iter().map(|f| f.to_lowercase()).collect();
    wanted.iter().any(|cat| features.contains(cat))
}
