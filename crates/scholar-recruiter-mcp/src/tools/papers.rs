//! Paper tools: search_papers, get_paper_details, get_paper_citations.

use serde_json::json;

use super::{McpTool, ToolContext, page_size, parse_input, response_format_schema};
use crate::config::fields;
use crate::error::ToolResult;
use crate::formatters::{self, json as compact};
use crate::models::{
    Paper, PaperCitationsInput, PaperDetailsInput, ResponseFormat, SearchPapersInput,
};

/// Paper search with venue, year and citation filters.
pub struct SearchPapersTool;

impl SearchPapersTool {
    /// Query parameters for the bulk search endpoint, venue already resolved.
    fn filters(ctx: &ToolContext, params: &SearchPapersInput) -> Vec<(String, String)> {
        let mut filters = Vec::new();

        if let Some(venue) = params.venue.as_deref().filter(|v| !v.trim().is_empty()) {
            filters.push(("venue".to_string(), ctx.venues.resolve(venue)));
        }

        let year = match (params.year_from, params.year_to) {
            (Some(from), Some(to)) => Some(format!("{from}-{to}")),
            (Some(from), None) => Some(format!("{from}-")),
            (None, Some(to)) => Some(format!("-{to}")),
            (None, None) => None,
        };
        if let Some(year) = year {
            filters.push(("year".to_string(), year));
        }

        if let Some(min) = params.min_citations {
            filters.push(("minCitationCount".to_string(), min.to_string()));
        }

        if let Some(fos) = params.fields_of_study.as_deref().filter(|f| !f.trim().is_empty()) {
            filters.push(("fieldsOfStudy".to_string(), fos.to_string()));
        }

        if params.open_access_only {
            filters.push(("openAccessPdf".to_string(), String::new()));
        }

        filters
    }

    /// Whether a returned paper honours the requested filters.
    fn keep(params: &SearchPapersInput, paper: &Paper) -> bool {
        if params.min_citations.is_some_and(|min| paper.citations() < min) {
            return false;
        }
        if let Some(from) = params.year_from {
            if paper.year.is_none_or(|y| y < from) {
                return false;
            }
        }
        if let Some(to) = params.year_to {
            if paper.year.is_none_or(|y| y > to) {
                return false;
            }
        }
        !(params.open_access_only && paper.pdf_url().is_none())
    }
}

#[async_trait::async_trait]
impl McpTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "Search academic papers by topic with optional venue, year range, citation and \
         field-of-study filters. Venue accepts shortcuts like 'neurips' or 'cvpr'."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (e.g., 'diffusion models')"
                },
                "venue": {
                    "type": "string",
                    "description": "Venue shortcut (see list_ml_venues) or full venue name"
                },
                "yearFrom": {
                    "type": "integer",
                    "description": "Minimum publication year"
                },
                "yearTo": {
                    "type": "integer",
                    "description": "Maximum publication year"
                },
                "minCitations": {
                    "type": "integer",
                    "description": "Minimum citation count"
                },
                "fieldsOfStudy": {
                    "type": "string",
                    "description": "Comma-separated fields (e.g., 'Computer Science')"
                },
                "openAccessOnly": {
                    "type": "boolean",
                    "default": false
                },
                "limit": {
                    "type": "integer",
                    "default": 20,
                    "minimum": 1,
                    "maximum": 100
                },
                "sort": {
                    "type": "string",
                    "enum": ["citationCount:desc", "publicationDate:desc", "paperId"],
                    "default": "citationCount:desc"
                },
                "responseFormat": response_format_schema()
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchPapersInput = parse_input(input)?;
        let filters = Self::filters(ctx, &params);

        let result = ctx
            .scholar
            .search_papers_bulk(
                &params.query,
                fields::PAPER_SEARCH,
                Some(params.sort.as_param()),
                &filters,
            )
            .await?;

        let total = result.total;
        let papers: Vec<Paper> = result
            .data
            .into_iter()
            .filter(|p| Self::keep(&params, p))
            .take(page_size(params.limit) as usize)
            .collect();

        tracing::debug!(total, returned = papers.len(), "search_papers filtered results");

        match params.response_format {
            ResponseFormat::Markdown => {
                Ok(formatters::format_papers_markdown(&papers, Some(total)))
            }
            ResponseFormat::Json => {
                let compact: Vec<_> = papers.iter().map(compact::compact_paper).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "total": total,
                    "returned": compact.len(),
                    "papers": compact,
                }))?)
            }
        }
    }
}

/// Full metadata for one paper.
pub struct PaperDetailsTool;

#[async_trait::async_trait]
impl McpTool for PaperDetailsTool {
    fn name(&self) -> &'static str {
        "get_paper_details"
    }

    fn description(&self) -> &'static str {
        "Get full details for a paper, including abstract, TLDR, fields of study and links. \
         Accepts Semantic Scholar IDs, 'DOI:...' or 'ARXIV:...'."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "Paper ID (S2 ID, DOI:xxx, ARXIV:xxx)"
                },
                "responseFormat": response_format_schema()
            },
            "required": ["paperId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperDetailsInput = parse_input(input)?;

        let paper = ctx.scholar.get_paper(params.paper_id.trim(), fields::PAPER_DETAIL).await?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_paper_detail_markdown(&paper)),
            ResponseFormat::Json => {
                Ok(serde_json::to_string_pretty(&compact::paper_detail(&paper))?)
            }
        }
    }
}

/// Papers citing a given paper.
pub struct PaperCitationsTool;

#[async_trait::async_trait]
impl McpTool for PaperCitationsTool {
    fn name(&self) -> &'static str {
        "get_paper_citations"
    }

    fn description(&self) -> &'static str {
        "List papers that cite a given paper, with influential citations marked."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperId": {
                    "type": "string",
                    "description": "Paper ID (S2 ID, DOI:xxx, ARXIV:xxx)"
                },
                "limit": {
                    "type": "integer",
                    "default": 20,
                    "minimum": 1,
                    "maximum": 100
                },
                "responseFormat": response_format_schema()
            },
            "required": ["paperId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperCitationsInput = parse_input(input)?;
        let paper_id = params.paper_id.trim();

        let result = ctx
            .scholar
            .get_citations(paper_id, page_size(params.limit), fields::CITATION)
            .await?;

        match params.response_format {
            ResponseFormat::Markdown => {
                Ok(formatters::format_citations_markdown(paper_id, &result.data))
            }
            ResponseFormat::Json => {
                let citations: Vec<_> = result
                    .data
                    .iter()
                    .filter_map(|c| {
                        let paper = c.paper.as_ref()?;
                        let mut obj = compact::compact_paper(paper);
                        obj["influential"] = json!(c.is_influential.unwrap_or(false));
                        Some(obj)
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "paperId": paper_id,
                    "returned": citations.len(),
                    "next": result.next,
                    "citations": citations,
                }))?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(value: serde_json::Value) -> SearchPapersInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_keep_applies_year_and_citations() {
        let params = input(json!({"query": "q", "yearFrom": 2022, "minCitations": 50}));

        let ok = Paper { year: Some(2023), citation_count: Some(50), ..Default::default() };
        let few = Paper { year: Some(2023), citation_count: Some(49), ..Default::default() };
        let old = Paper { year: Some(2021), citation_count: Some(500), ..Default::default() };
        let undated = Paper { year: None, citation_count: Some(500), ..Default::default() };

        assert!(SearchPapersTool::keep(&params, &ok));
        assert!(!SearchPapersTool::keep(&params, &few));
        assert!(!SearchPapersTool::keep(&params, &old));
        assert!(!SearchPapersTool::keep(&params, &undated));
    }

    #[test]
    fn test_keep_open_access() {
        let params = input(json!({"query": "q", "openAccessOnly": true}));
        assert!(!SearchPapersTool::keep(&params, &Paper::default()));
    }
}
