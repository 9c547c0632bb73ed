//! Recruiting tools: find_venue_top_authors, find_rising_stars, combined_researcher_profile.
//!
//! These compose several requests. Each step awaits the previous one and any
//! failed request fails the tool; nothing is defaulted.

use std::collections::HashMap;

use serde_json::json;

use super::github::fetch_github_profile;
use super::{McpTool, ToolContext, parse_input, response_format_schema};
use crate::config::{api, fields};
use crate::error::{ClientError, ToolResult};
use crate::formatters::{self, json as compact};
use crate::models::{
    Author, CombinedProfileInput, CompositeProfile, IdentityMatch, Paper, PaperSort, RecentPaper,
    ResponseFormat, RisingStar, RisingStarsInput, VenueAuthor, VenueTopAuthorsInput,
};
use crate::scoring::{AcademicTier, academic_score, composite_score, rising_star_score};

/// Fields of study searched for rising stars.
const RISING_STAR_FIELD: &str = "Computer Science";

/// Aggregate per-author output from a set of venue papers.
///
/// Authors without an ID are skipped.
fn aggregate_venue_authors(papers: &[Paper]) -> Vec<VenueAuthor> {
    let mut order: Vec<String> = Vec::new();
    let mut stats: HashMap<String, VenueAuthor> = HashMap::new();

    for paper in papers {
        let citations = paper.citations();
        for author in &paper.authors {
            let Some(id) = author.author_id.as_deref().filter(|id| !id.is_empty()) else {
                continue;
            };
            let entry = stats.entry(id.to_string()).or_insert_with(|| {
                order.push(id.to_string());
                VenueAuthor {
                    author_id: id.to_string(),
                    name: author.name_or_default().to_string(),
                    venue_papers: 0,
                    venue_citations: 0,
                    first_year: None,
                    last_year: None,
                    affiliation: None,
                    h_index: None,
                    total_citations: None,
                }
            });
            entry.venue_papers += 1;
            entry.venue_citations += citations;
            if let Some(year) = paper.year {
                entry.first_year = Some(entry.first_year.map_or(year, |y| y.min(year)));
                entry.last_year = Some(entry.last_year.map_or(year, |y| y.max(year)));
            }
        }
    }

    order.into_iter().filter_map(|id| stats.remove(&id)).collect()
}

/// Keep authors with at least `min_papers` and rank them.
///
/// Order: venue citations, then venue papers, then name and ID.
fn rank_venue_authors(authors: Vec<VenueAuthor>, min_papers: u32) -> Vec<VenueAuthor> {
    let mut ranked: Vec<VenueAuthor> =
        authors.into_iter().filter(|a| a.venue_papers >= min_papers).collect();
    ranked.sort_by(|a, b| {
        b.venue_citations
            .cmp(&a.venue_citations)
            .then_with(|| b.venue_papers.cmp(&a.venue_papers))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.author_id.cmp(&b.author_id))
    });
    ranked
}

/// Top authors at a venue.
pub struct VenueTopAuthorsTool;

#[async_trait::async_trait]
impl McpTool for VenueTopAuthorsTool {
    fn name(&self) -> &'static str {
        "find_venue_top_authors"
    }

    fn description(&self) -> &'static str {
        "Find the most impactful authors at a venue (e.g. 'neurips', 'cvpr') since a given \
         year, ranked by citations of their venue papers. Optionally narrow by topic."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "venue": {
                    "type": "string",
                    "description": "Venue shortcut (see list_ml_venues) or full venue name"
                },
                "query": {
                    "type": "string",
                    "description": "Optional topic filter"
                },
                "yearFrom": {
                    "type": "integer",
                    "default": 2020
                },
                "minPapers": {
                    "type": "integer",
                    "default": 2,
                    "description": "Minimum papers at the venue"
                },
                "limit": {
                    "type": "integer",
                    "default": 20
                },
                "responseFormat": response_format_schema()
            },
            "required": ["venue"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: VenueTopAuthorsInput = parse_input(input)?;
        let venue = ctx.venues.resolve(&params.venue);
        let query = params.query.as_deref().map(str::trim).filter(|q| !q.is_empty()).unwrap_or("*");

        let filters = vec![
            ("venue".to_string(), venue.clone()),
            ("year".to_string(), format!("{}-", params.year_from)),
        ];
        let result = ctx
            .scholar
            .search_papers_bulk(
                query,
                fields::AGGREGATION,
                Some(PaperSort::CitationsDesc.as_param()),
                &filters,
            )
            .await?;

        let papers: Vec<Paper> =
            result.data.into_iter().take(api::MAX_PAGE_SIZE as usize).collect();
        let mut ranked = rank_venue_authors(aggregate_venue_authors(&papers), params.min_papers);
        ranked.truncate((params.limit as usize).min(api::MAX_BATCH_IDS));

        tracing::info!(
            venue = %venue,
            papers = papers.len(),
            authors = ranked.len(),
            "Venue authors aggregated"
        );

        if !ranked.is_empty() {
            let ids: Vec<String> = ranked.iter().map(|a| a.author_id.clone()).collect();
            let details = ctx.scholar.get_authors_batch(&ids, fields::AUTHOR).await?;
            for (entry, detail) in ranked.iter_mut().zip(details) {
                if let Some(detail) = detail {
                    entry.affiliation = detail.primary_affiliation().map(str::to_string);
                    entry.h_index = detail.h_index;
                    entry.total_citations = detail.citation_count;
                }
            }
        }

        match params.response_format {
            ResponseFormat::Markdown => {
                Ok(formatters::format_venue_authors_markdown(&venue, params.year_from, &ranked))
            }
            ResponseFormat::Json => {
                let authors: Vec<_> = ranked.iter().map(compact::venue_author).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "venue": venue,
                    "yearFrom": params.year_from,
                    "papersAnalyzed": papers.len(),
                    "authors": authors,
                }))?)
            }
        }
    }
}

/// Collect distinct author IDs in first-seen order, with their recent papers.
fn collect_recent_authors(papers: &[Paper]) -> (Vec<String>, HashMap<String, Vec<RecentPaper>>) {
    let mut order: Vec<String> = Vec::new();
    let mut by_author: HashMap<String, Vec<RecentPaper>> = HashMap::new();

    for paper in papers {
        for author in &paper.authors {
            let Some(id) = author.author_id.as_deref().filter(|id| !id.is_empty()) else {
                continue;
            };
            let recent = by_author.entry(id.to_string()).or_insert_with(|| {
                order.push(id.to_string());
                Vec::new()
            });
            recent.push(RecentPaper {
                paper_id: paper.paper_id.clone(),
                title: paper.title_or_default().to_string(),
                year: paper.year,
                citations: paper.citations(),
            });
        }
    }

    order.truncate(api::MAX_BATCH_IDS);
    (order, by_author)
}

/// Score enriched authors, dropping anyone above the h-index ceiling.
fn rank_rising_stars(
    authors: Vec<Author>,
    mut recent: HashMap<String, Vec<RecentPaper>>,
    max_h_index: i32,
) -> Vec<RisingStar> {
    let mut stars: Vec<RisingStar> = authors
        .into_iter()
        .filter(|a| a.h_index_value() <= max_h_index)
        .map(|author| {
            let h_index = author.h_index_value();
            let recent_papers = recent.remove(&author.author_id).unwrap_or_default();
            let recent_citations: i64 = recent_papers.iter().map(|p| p.citations).sum();
            RisingStar {
                name: author.name_or_default().to_string(),
                h_index,
                total_citations: author.citations(),
                affiliation: author.primary_affiliation().map(str::to_string),
                homepage: author.homepage.clone().filter(|h| !h.is_empty()),
                recent_citations,
                recent_papers,
                score: rising_star_score(recent_citations, h_index),
                author_id: author.author_id,
            }
        })
        .collect();

    stars.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.author_id.cmp(&b.author_id)));
    stars
}

/// Early-career authors with high recent impact.
pub struct RisingStarsTool;

#[async_trait::async_trait]
impl McpTool for RisingStarsTool {
    fn name(&self) -> &'static str {
        "find_rising_stars"
    }

    fn description(&self) -> &'static str {
        "Find early-career researchers with highly cited recent papers on a topic. \
         Authors above the h-index ceiling are excluded; ranking favours recent citations \
         relative to h-index."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "Research area (e.g., 'multimodal LLMs')"
                },
                "yearFrom": {
                    "type": "integer",
                    "default": 2022
                },
                "minCitations": {
                    "type": "integer",
                    "default": 50,
                    "description": "Minimum citations for a paper to count"
                },
                "maxHIndex": {
                    "type": "integer",
                    "default": 30,
                    "description": "Exclude authors above this h-index"
                },
                "limit": {
                    "type": "integer",
                    "default": 15
                },
                "responseFormat": response_format_schema()
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: RisingStarsInput = parse_input(input)?;
        let topic = params.topic.trim();

        let filters = vec![
            ("year".to_string(), format!("{}-", params.year_from)),
            ("minCitationCount".to_string(), params.min_citations.to_string()),
            ("fieldsOfStudy".to_string(), RISING_STAR_FIELD.to_string()),
        ];
        let result = ctx
            .scholar
            .search_papers_bulk(
                topic,
                fields::AGGREGATION,
                Some(PaperSort::CitationsDesc.as_param()),
                &filters,
            )
            .await?;

        let papers: Vec<Paper> = result
            .data
            .into_iter()
            .filter(|p| p.citations() >= params.min_citations)
            .filter(|p| p.year.is_some_and(|y| y >= params.year_from))
            .take(api::MAX_PAGE_SIZE as usize)
            .collect();

        let (ids, recent) = collect_recent_authors(&papers);
        let mut stars = if ids.is_empty() {
            Vec::new()
        } else {
            let details = ctx.scholar.get_authors_batch(&ids, fields::AUTHOR).await?;
            rank_rising_stars(details.into_iter().flatten().collect(), recent, params.max_h_index)
        };
        stars.truncate(params.limit as usize);

        tracing::info!(
            topic,
            papers = papers.len(),
            candidates = ids.len(),
            returned = stars.len(),
            "Rising stars ranked"
        );

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_rising_stars_markdown(topic, &stars)),
            ResponseFormat::Json => {
                let stars: Vec<_> = stars.iter().map(compact::rising_star).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "topic": topic,
                    "criteria": {
                        "yearFrom": params.year_from,
                        "minCitations": params.min_citations,
                        "maxHIndex": params.max_h_index,
                    },
                    "risingStars": stars,
                }))?)
            }
        }
    }
}

/// Academic profile merged with an optional GitHub profile.
pub struct CombinedProfileTool;

impl CombinedProfileTool {
    async fn academic_profile(
        ctx: &ToolContext,
        params: &CombinedProfileInput,
    ) -> ToolResult<Author> {
        if let Some(id) = params.s2_author_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
        {
            return Ok(ctx.scholar.get_author(id, fields::AUTHOR).await?);
        }

        let name = params.author_name.trim();
        let result = ctx.scholar.search_authors(name, 1, fields::AUTHOR).await?;
        let author = result.data.into_iter().next().ok_or_else(|| {
            ClientError::not_found(format!("Semantic Scholar author matching '{name}'"))
        })?;
        Ok(author)
    }
}

#[async_trait::async_trait]
impl McpTool for CombinedProfileTool {
    fn name(&self) -> &'static str {
        "combined_researcher_profile"
    }

    fn description(&self) -> &'static str {
        "Combine a researcher's Semantic Scholar profile with their GitHub activity into a \
         single recruiting assessment with academic, GitHub and composite scores."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "authorName": {
                    "type": "string",
                    "description": "Researcher's name (searched when no authorId is given)"
                },
                "s2AuthorId": {
                    "type": "string",
                    "description": "Semantic Scholar author ID"
                },
                "githubUsername": {
                    "type": "string",
                    "description": "GitHub login (requires GITHUB_TOKEN)"
                },
                "responseFormat": response_format_schema()
            },
            "required": ["authorName"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CombinedProfileInput = parse_input(input)?;

        let academic = Self::academic_profile(ctx, &params).await?;

        let github = match params.github_username.as_deref().map(str::trim) {
            Some(login) if !login.is_empty() => Some(fetch_github_profile(ctx, login).await?),
            _ => None,
        };

        let identity_match = github.as_ref().map(|gh| {
            let academic_name = academic.name_or_default();
            let query = params.author_name.as_str();
            IdentityMatch::best([
                (academic_name, gh.name.as_str()),
                (academic_name, gh.username.as_str()),
                (query, gh.name.as_str()),
                (query, gh.username.as_str()),
            ])
        });

        let academic_score =
            academic_score(academic.h_index_value(), academic.citations(), &ctx.scoring.academic);
        let github_score = github.as_ref().map(|gh| gh.activity_score);

        let profile = CompositeProfile {
            query_name: params.author_name.trim().to_string(),
            academic_tier: AcademicTier::from_score(academic_score),
            composite_score: composite_score(academic_score, github_score, &ctx.scoring),
            academic,
            github,
            identity_match,
            academic_score,
            github_score,
        };

        tracing::info!(
            author_id = %profile.academic.author_id,
            academic = profile.academic_score,
            composite = profile.composite_score,
            "Combined profile built"
        );

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_composite_markdown(&profile)),
            ResponseFormat::Json => {
                Ok(serde_json::to_string_pretty(&compact::composite_profile(&profile))?)
            }
        }
    }
}
