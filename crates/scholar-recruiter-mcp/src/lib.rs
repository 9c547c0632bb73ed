//! Scholar Recruiter MCP Server
//!
//! A Model Context Protocol (MCP) server for finding and assessing researchers.
//! It queries the Semantic Scholar Graph API for papers and authors, the GitHub
//! REST API for code activity, and merges both into recruiting scores.
//!
//! # Features
//!
//! - **13 MCP Tools**: paper and author lookup, venue and rising-star discovery,
//!   GitHub activity scoring, combined profiles
//! - **Venue shortcuts**: `neurips`, `cvpr`, `acl` and friends resolve to canonical names
//! - **Trait seams**: tools depend on [`client::ScholarApi`] and [`client::GitHubApi`]
//!
//! # Example
//!
//! ```no_run
//! use scholar_recruiter_mcp::{config::Config, server::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     McpServer::from_config(&config)?.run_stdio().await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod scoring;
pub mod server;
pub mod tools;
pub mod venues;

pub use client::{GitHubClient, SemanticScholarClient};
pub use config::Config;
pub use error::{ClientError, ToolError};
