//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses its arguments into a typed input
//! 2. Calls the Semantic Scholar and/or GitHub API through [`ToolContext`]
//! 3. Formats the result as JSON or Markdown

mod authors;
mod github;
mod papers;
mod recruiting;
mod venues;

pub use authors::*;
pub use github::*;
pub use papers::*;
pub use recruiting::*;
pub use venues::*;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::client::{GitHubApi, GitHubClient, ScholarApi, SemanticScholarClient};
use crate::config::{Config, api};
use crate::error::{ToolError, ToolResult};
use crate::scoring::ScoringWeights;
use crate::venues::VenueTable;

/// Tool execution context.
///
/// Built once at startup; every field is read-only afterwards.
#[derive(Clone)]
pub struct ToolContext {
    /// Semantic Scholar API.
    pub scholar: Arc<dyn ScholarApi>,

    /// GitHub API, present only when a token is configured.
    github: Option<Arc<dyn GitHubApi>>,

    /// Venue shortcut table.
    pub venues: Arc<VenueTable>,

    /// Scoring constants.
    pub scoring: ScoringWeights,
}

impl ToolContext {
    /// Create a context with the default venue table and weights.
    #[must_use]
    pub fn new(scholar: Arc<dyn ScholarApi>, github: Option<Arc<dyn GitHubApi>>) -> Self {
        Self {
            scholar,
            github,
            venues: Arc::new(VenueTable::default()),
            scoring: ScoringWeights::default(),
        }
    }

    /// Build the HTTP clients from configuration.
    ///
    /// The GitHub client is only created when a token is configured.
    ///
    /// # Errors
    ///
    /// Returns error if an HTTP client cannot be initialized.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let scholar: Arc<dyn ScholarApi> = Arc::new(SemanticScholarClient::new(config)?);
        let github: Option<Arc<dyn GitHubApi>> = if config.has_github_token() {
            Some(Arc::new(GitHubClient::new(config)?))
        } else {
            None
        };

        Ok(Self {
            scholar,
            github,
            venues: Arc::new(config.venues.clone()),
            scoring: config.scoring,
        })
    }

    /// Replace the venue table.
    #[must_use]
    pub fn with_venues(mut self, venues: VenueTable) -> Self {
        self.venues = Arc::new(venues);
        self
    }

    /// Replace the scoring weights.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringWeights) -> Self {
        self.scoring = scoring;
        self
    }

    /// The GitHub API, or a missing-credential error.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::MissingCredential`] when no token was configured.
    pub fn github(&self) -> ToolResult<&dyn GitHubApi> {
        self.github.as_deref().ok_or_else(ToolError::missing_github_token)
    }

    /// Whether GitHub tools can run.
    #[must_use]
    pub fn has_github(&self) -> bool {
        self.github.is_some()
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("has_github", &self.has_github())
            .field("venues", &self.venues.len())
            .finish_non_exhaustive()
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_papers").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // Paper tools (3)
        Box::new(papers::SearchPapersTool),
        Box::new(papers::PaperDetailsTool),
        Box::new(papers::PaperCitationsTool),
        // Author tools (4)
        Box::new(authors::SearchAuthorsTool),
        Box::new(authors::AuthorDetailsTool),
        Box::new(authors::AuthorPapersTool),
        Box::new(authors::BatchAuthorLookupTool),
        // Recruiting tools (3)
        Box::new(recruiting::VenueTopAuthorsTool),
        Box::new(recruiting::RisingStarsTool),
        Box::new(recruiting::CombinedProfileTool),
        // GitHub tools (2)
        Box::new(github::GitHubSearchTool),
        Box::new(github::GitHubActivityTool),
        // Reference (1)
        Box::new(venues::ListVenuesTool),
    ]
}

/// Deserialize tool arguments, reporting schema mismatches as invalid arguments.
fn parse_input<T: DeserializeOwned>(input: serde_json::Value) -> ToolResult<T> {
    // Clients may send `null` for tools without parameters.
    let input = if input.is_null() { serde_json::json!({}) } else { input };
    serde_json::from_value(input).map_err(ToolError::InvalidArguments)
}

/// Clamp a page size into the range the API accepts.
fn page_size(limit: u32) -> u32 {
    limit.clamp(1, api::MAX_PAGE_SIZE)
}

/// JSON schema fragment shared by every tool.
fn response_format_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "enum": ["json", "markdown"],
        "default": "json",
        "description": "Output format"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all_tools() {
        let tools = register_all_tools();
        assert_eq!(tools.len(), 13);

        let mut names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_schemas_are_objects() {
        for tool in register_all_tools() {
            let schema = tool.input_schema();
            assert_eq!(schema["type"], "object", "{}", tool.name());
            assert!(schema["properties"].is_object(), "{}", tool.name());
        }
    }

    #[test]
    fn test_page_size() {
        assert_eq!(page_size(0), 1);
        assert_eq!(page_size(20), 20);
        assert_eq!(page_size(1000), 100);
    }

    #[test]
    fn test_parse_input_null() {
        let input: crate::models::ListVenuesInput = parse_input(serde_json::Value::Null).unwrap();
        assert_eq!(input.response_format, crate::models::ResponseFormat::Json);
    }
}
