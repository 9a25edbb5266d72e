//! CLI module for the LLM Catalog API
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP API server

pub mod serve;

use clap::{Parser, Subcommand};

/// LLM Catalog API - Browse, filter and compare LLM offerings
#[derive(Parser)]
#[command(name = "llm-catalog-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
