//! Built-in catalog dataset
//!
//! The catalog is constant for the process lifetime. Records are seeded once
//! at startup and never mutated; the category list is a fixed enumeration
//! independent of which records currently carry each tag.

use crate::domain::{Cost, Llm, LlmId};

/// The fixed list of known category/tag strings
pub const KNOWN_CATEGORIES: [&str; 7] = [
    "cloud",
    "on-premise",
    "open-source",
    "api",
    "fine-tuning",
    "chat-optimization",
    "chatgpt",
];

/// Build the built-in LLM catalog in its canonical order.
///
/// IDs follow the `llm-N` convention and are unique; every record has a
/// non-negative price.
pub fn seed_catalog() -> Vec<Llm> {
    vec![
        Llm::new(
            llm_id("llm-1"),
            "OpenAI GPT-4",
            "OpenAI",
            Cost::new("per 1K tokens", 0.06, "USD"),
        )
        .with_features(vec![
            "context-8k".into(),
            "cloud".into(),
            "api".into(),
            "fine-tuning".into(),
            "chatgpt".into(),
        ])
        .with_usability(vec!["easy integration".into(), "good docs".into()])
        .with_documentation_url("https://platform.openai.com/docs/guides/gpt")
        .with_kind("chatgpt"),
        Llm::new(
            llm_id("llm-2"),
            "Anthropic Claude 2",
            "Anthropic",
            Cost::new("per 1M tokens", 8.00, "USD"),
        )
        .with_features(vec![
            "context-100k".into(),
            "cloud".into(),
            "api".into(),
            "chat-optimization".into(),
        ])
        .with_usability(vec!["fine control".into(), "clear api".into()])
        .with_documentation_url("https://docs.anthropic.com/claude"),
        Llm::new(
            llm_id("llm-3"),
            "OpenAI GPT-3.5 Turbo",
            "OpenAI",
            Cost::new("per 1K tokens", 0.002, "USD"),
        )
        .with_features(vec![
            "context-16k".into(),
            "cloud".into(),
            "api".into(),
            "chatgpt".into(),
        ])
        .with_usability(vec!["cheap".into(), "fast responses".into()])
        .with_documentation_url("https://platform.openai.com/docs/guides/gpt")
        .with_kind("chatgpt"),
        Llm::new(
            llm_id("llm-4"),
            "Meta Llama 2 70B",
            "Meta",
            Cost::new("per hour (self-hosted)", 0.0, "USD"),
        )
        .with_features(vec![
            "context-4k".into(),
            "on-premise".into(),
            "open-source".into(),
            "fine-tuning".into(),
        ])
        .with_usability(vec!["full weight access".into(), "community tooling".into()])
        .with_documentation_url("https://ai.meta.com/llama/"),
        Llm::new(
            llm_id("llm-5"),
            "Mistral 7B Instruct",
            "Mistral AI",
            Cost::new("per 1M tokens", 0.25, "USD"),
        )
        .with_features(vec![
            "context-8k".into(),
            "cloud".into(),
            "api".into(),
            "open-source".into(),
        ])
        .with_usability(vec!["small footprint".into(), "permissive license".into()]),
        Llm::new(
            llm_id("llm-6"),
            "Cohere Command",
            "Cohere",
            Cost::new("per 1M tokens", 1.00, "USD"),
        )
        .with_features(vec![
            "cloud".into(),
            "api".into(),
            "fine-tuning".into(),
            "chat-optimization".into(),
        ])
        .with_documentation_url("https://docs.cohere.com/docs/command-beta"),
    ]
}

/// Category list as owned strings, in enumeration order
pub fn seed_categories() -> Vec<String> {
    KNOWN_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

// Seed IDs are static; an invalid one is a programming error.
fn llm_id(id: &str) -> LlmId {
    LlmId::new(id).unwrap_or_else(|e| panic!("invalid seed LLM id '{}': {}", id, e))
}
