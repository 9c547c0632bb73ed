//! Reference tool: list_ml_venues.

use serde_json::json;

use super::{McpTool, ToolContext, parse_input, response_format_schema};
use crate::error::ToolResult;
use crate::formatters::{self, json as compact};
use crate::models::{ListVenuesInput, ResponseFormat};

/// Venue shortcut table. No network access.
pub struct ListVenuesTool;

#[async_trait::async_trait]
impl McpTool for ListVenuesTool {
    fn name(&self) -> &'static str {
        "list_ml_venues"
    }

    fn description(&self) -> &'static str {
        "List the venue shortcuts accepted by search_papers and find_venue_top_authors, \
         grouped by category."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "responseFormat": response_format_schema()
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: ListVenuesInput = parse_input(input)?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_venues_markdown(&ctx.venues)),
            ResponseFormat::Json => {
                Ok(serde_json::to_string_pretty(&compact::venue_table(&ctx.venues))?)
            }
        }
    }
}
