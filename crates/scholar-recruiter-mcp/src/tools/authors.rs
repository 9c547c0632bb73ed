//! Author tools: search_authors, get_author_details, get_author_papers, batch_author_lookup.

use std::cmp::Reverse;

use serde_json::json;

use super::{McpTool, ToolContext, page_size, parse_input, response_format_schema};
use crate::config::{api, fields};
use crate::error::{ToolError, ToolResult};
use crate::formatters::{self, json as compact};
use crate::models::{
    Author, AuthorDetailsInput, AuthorPaperSort, AuthorPapersInput, BatchAuthorLookupInput, Paper,
    ResponseFormat, SearchAuthorsInput,
};

/// Papers listed in the author detail view.
const TOP_PAPERS: usize = 5;

/// Author search by name.
pub struct SearchAuthorsTool;

#[async_trait::async_trait]
impl McpTool for SearchAuthorsTool {
    fn name(&self) -> &'static str {
        "search_authors"
    }

    fn description(&self) -> &'static str {
        "Search for researchers by name. Returns affiliations, h-index, citation and paper counts."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Author name to search"
                },
                "limit": {
                    "type": "integer",
                    "default": 10,
                    "minimum": 1,
                    "maximum": 100
                },
                "responseFormat": response_format_schema()
            },
            "required": ["name"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchAuthorsInput = parse_input(input)?;

        let result = ctx
            .scholar
            .search_authors(&params.name, page_size(params.limit), fields::AUTHOR)
            .await?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_authors_markdown(&result.data)),
            ResponseFormat::Json => {
                let authors: Vec<_> = result.data.iter().map(compact::compact_author).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "total": result.total,
                    "authors": authors,
                }))?)
            }
        }
    }
}

/// Author profile with top papers.
pub struct AuthorDetailsTool;

#[async_trait::async_trait]
impl McpTool for AuthorDetailsTool {
    fn name(&self) -> &'static str {
        "get_author_details"
    }

    fn description(&self) -> &'static str {
        "Get a researcher's profile: affiliations, metrics, external IDs and most cited papers."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "authorId": {
                    "type": "string",
                    "description": "Semantic Scholar author ID"
                },
                "responseFormat": response_format_schema()
            },
            "required": ["authorId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AuthorDetailsInput = parse_input(input)?;

        let author = ctx.scholar.get_author(params.author_id.trim(), fields::AUTHOR_DETAIL).await?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_author_markdown(&author, TOP_PAPERS)),
            ResponseFormat::Json => {
                Ok(serde_json::to_string_pretty(&compact::author_detail(&author, TOP_PAPERS))?)
            }
        }
    }
}

/// An author's papers, filtered and sorted locally.
pub struct AuthorPapersTool;

impl AuthorPapersTool {
    fn sort(papers: &mut [Paper], sort_by: AuthorPaperSort) {
        match sort_by {
            AuthorPaperSort::Citations => papers.sort_by_key(|p| Reverse(p.citations())),
            AuthorPaperSort::Influential => {
                papers.sort_by_key(|p| Reverse(p.influential_citations()));
            }
            AuthorPaperSort::Year => papers.sort_by_key(|p| Reverse(p.year.unwrap_or(0))),
        }
    }
}

#[async_trait::async_trait]
impl McpTool for AuthorPapersTool {
    fn name(&self) -> &'static str {
        "get_author_papers"
    }

    fn description(&self) -> &'static str {
        "List a researcher's papers, optionally since a given year, sorted by citations, \
         year or influential citations."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "authorId": {
                    "type": "string",
                    "description": "Semantic Scholar author ID"
                },
                "limit": {
                    "type": "integer",
                    "default": 20,
                    "minimum": 1,
                    "maximum": 100
                },
                "yearFrom": {
                    "type": "integer",
                    "description": "Only papers published in or after this year"
                },
                "sortBy": {
                    "type": "string",
                    "enum": ["citations", "year", "influential"],
                    "default": "citations"
                },
                "responseFormat": response_format_schema()
            },
            "required": ["authorId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AuthorPapersInput = parse_input(input)?;
        let author_id = params.author_id.trim();
        let limit = page_size(params.limit);

        let result =
            ctx.scholar.get_author_papers(author_id, limit, fields::AUTHOR_PAPERS).await?;

        let mut papers: Vec<Paper> = result
            .data
            .into_iter()
            .filter(|p| params.year_from.is_none_or(|from| p.year.unwrap_or(0) >= from))
            .collect();
        Self::sort(&mut papers, params.sort_by);
        papers.truncate(limit as usize);

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_papers_markdown(&papers, None)),
            ResponseFormat::Json => {
                let compact: Vec<_> = papers.iter().map(compact::compact_paper).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "authorId": author_id,
                    "returned": compact.len(),
                    "papers": compact,
                }))?)
            }
        }
    }
}

/// Lookup of many authors in one request.
pub struct BatchAuthorLookupTool;

#[async_trait::async_trait]
impl McpTool for BatchAuthorLookupTool {
    fn name(&self) -> &'static str {
        "batch_author_lookup"
    }

    fn description(&self) -> &'static str {
        "Look up to 500 authors at once by Semantic Scholar ID. IDs may be a list or a \
         comma/pipe separated string; unknown IDs are reported as not found."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "authorIds": {
                    "oneOf": [
                        {"type": "array", "items": {"type": "string"}},
                        {"type": "string"}
                    ],
                    "description": "Author IDs (list, or '123,456|789')"
                },
                "responseFormat": response_format_schema()
            },
            "required": ["authorIds"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: BatchAuthorLookupInput = parse_input(input)?;
        let ids = params.author_ids.normalized();

        if ids.is_empty() {
            return Err(ToolError::validation("authorIds", "no valid author IDs provided"));
        }
        if ids.len() > api::MAX_BATCH_IDS {
            return Err(ToolError::validation(
                "authorIds",
                format!("at most {} IDs per request, got {}", api::MAX_BATCH_IDS, ids.len()),
            ));
        }

        let results = ctx.scholar.get_authors_batch(&ids, fields::AUTHOR).await?;

        let mut found: Vec<Author> = Vec::new();
        let mut not_found: Vec<String> = Vec::new();
        for (id, author) in ids.iter().zip(results.into_iter().chain(std::iter::repeat(None))) {
            match author {
                Some(author) => found.push(author),
                None => not_found.push(id.clone()),
            }
        }

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_batch_markdown(&found, &not_found)),
            ResponseFormat::Json => {
                let authors: Vec<_> = found.iter().map(compact::compact_author).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "requested": ids.len(),
                    "found": authors,
                    "notFound": not_found,
                }))?)
            }
        }
    }
}
