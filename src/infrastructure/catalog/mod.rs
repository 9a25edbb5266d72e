//! Catalog infrastructure - seed data

pub mod seed;

pub use seed::{seed_catalog, seed_categories, KNOWN_CATEGORIES};
