//! Infrastructure layer - concrete implementations and wiring

pub mod catalog;
pub mod logging;
pub mod services;
