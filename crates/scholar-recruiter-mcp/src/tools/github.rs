//! GitHub tools: search_researcher_github, github_activity_score.

use chrono::Utc;
use serde_json::json;

use super::{McpTool, ToolContext, page_size, parse_input, response_format_schema};
use crate::config::api;
use crate::error::ToolResult;
use crate::formatters::{self, json as compact};
use crate::models::{GitHubActivityInput, GitHubProfile, GitHubSearchInput, ResponseFormat};

/// Fetch user, repos and events and derive the activity profile.
///
/// Any failed request fails the whole profile.
pub(crate) async fn fetch_github_profile(
    ctx: &ToolContext,
    username: &str,
) -> ToolResult<GitHubProfile> {
    let github = ctx.github()?;

    let user = github.get_user(username).await?;
    let repos = github.get_user_repos(username, api::GITHUB_PAGE_SIZE).await?;
    let events = github.get_user_events(username, api::GITHUB_PAGE_SIZE).await?;

    let profile = GitHubProfile::build(
        &user,
        &repos,
        &events,
        &ctx.scoring.activity,
        chrono::Duration::days(api::RECENT_ACTIVITY_DAYS),
        Utc::now(),
    );

    tracing::info!(
        username = %profile.username,
        score = profile.activity_score,
        repos = repos.len(),
        events = events.len(),
        "GitHub profile scored"
    );

    Ok(profile)
}

/// Find GitHub accounts by a researcher's name.
pub struct GitHubSearchTool;

#[async_trait::async_trait]
impl McpTool for GitHubSearchTool {
    fn name(&self) -> &'static str {
        "search_researcher_github"
    }

    fn description(&self) -> &'static str {
        "Find a researcher's GitHub account by name. Returns bio, company, location, \
         followers and repo counts for each match. Requires GITHUB_TOKEN."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Researcher's full name"
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
        let params: GitHubSearchInput = parse_input(input)?;
        let github = ctx.github()?;
        let name = params.name.trim();

        let result =
            github.search_users(&format!("{name} in:name"), page_size(params.limit)).await?;

        let mut users = Vec::with_capacity(result.items.len());
        for hit in &result.items {
            users.push(github.get_user(&hit.login).await?);
        }

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_github_users_markdown(name, &users)),
            ResponseFormat::Json => {
                let users: Vec<_> = users.iter().map(compact::github_user).collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "query": name,
                    "totalCount": result.total_count,
                    "users": users,
                }))?)
            }
        }
    }
}

/// GitHub activity score for one account.
pub struct GitHubActivityTool;

#[async_trait::async_trait]
impl McpTool for GitHubActivityTool {
    fn name(&self) -> &'static str {
        "github_activity_score"
    }

    fn description(&self) -> &'static str {
        "Score a GitHub account's activity (0-100) from followers, stars, repos and recent \
         events, with top languages and repositories. Requires GITHUB_TOKEN."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "username": {
                    "type": "string",
                    "description": "GitHub login"
                },
                "responseFormat": response_format_schema()
            },
            "required": ["username"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: GitHubActivityInput = parse_input(input)?;

        let profile = fetch_github_profile(ctx, params.username.trim()).await?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_github_profile_markdown(&profile)),
            ResponseFormat::Json => {
                Ok(serde_json::to_string_pretty(&compact::github_profile(&profile))?)
            }
        }
    }
}
