//! GitHub REST API models and the derived activity profile.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{ActivityRating, ActivitySignals, ActivityWeights, activity_score};

/// `/search/users` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSearchResult {
    #[serde(default)]
    pub total_count: i64,

    #[serde(default)]
    pub items: Vec<GitHubUserSummary>,
}

/// A user hit from `/search/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubUserSummary {
    pub login: String,

    #[serde(default)]
    pub html_url: Option<String>,
}

/// A full user record from `/users/{login}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub blog: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub followers: u64,

    #[serde(default)]
    pub following: u64,

    #[serde(default)]
    pub public_repos: u64,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GitHubUser {
    /// Display name, falling back to the login.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.login)
    }

    /// Profile URL.
    #[must_use]
    pub fn profile_url(&self) -> String {
        self.html_url.clone().unwrap_or_else(|| format!("https://github.com/{}", self.login))
    }

    /// Bio if present and non-blank.
    #[must_use]
    pub fn bio_text(&self) -> Option<&str> {
        self.bio.as_deref().map(str::trim).filter(|b| !b.is_empty())
    }
}

/// A repository from `/users/{login}/repos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub name: String,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(default)]
    pub forks_count: u64,

    #[serde(default)]
    pub fork: bool,

    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

/// A public event from `/users/{login}/events`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubEvent {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl GitHubEvent {
    /// Whether this is a push (commit) event.
    #[must_use]
    pub fn is_push(&self) -> bool {
        self.kind.as_deref() == Some("PushEvent")
    }
}

/// Repository summary kept in a profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSummary {
    pub name: String,
    pub stars: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Derived GitHub activity profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubProfile {
    pub username: String,
    pub name: String,
    pub profile_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub total_stars: u64,
    pub total_forks: u64,
    /// Stars on repositories pushed within the recency window.
    pub recent_stars: u64,
    /// Latest event or push timestamp seen.
    pub last_activity: Option<DateTime<Utc>>,
    pub recent_events: u64,
    pub push_events: u64,
    /// Language and repository count, most used first.
    pub top_languages: Vec<(String, u64)>,
    pub top_repos: Vec<RepoSummary>,
    pub activity_score: u8,
    pub rating: ActivityRating,
}

impl GitHubProfile {
    /// Build a profile from the three GitHub responses.
    ///
    /// `now` anchors the recent-stars window so the result is reproducible.
    #[must_use]
    pub fn build(
        user: &GitHubUser,
        repos: &[GitHubRepo],
        events: &[GitHubEvent],
        weights: &ActivityWeights,
        recent_window: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        let total_stars: u64 = repos.iter().map(|r| r.stargazers_count).sum();
        let total_forks: u64 = repos.iter().map(|r| r.forks_count).sum();
        let cutoff = now - recent_window;
        let recent_stars: u64 = repos
            .iter()
            .filter(|r| r.pushed_at.is_some_and(|t| t >= cutoff))
            .map(|r| r.stargazers_count)
            .sum();

        let last_activity = events
            .iter()
            .filter_map(|e| e.created_at)
            .chain(repos.iter().filter_map(|r| r.pushed_at))
            .max();

        let mut languages: HashMap<&str, u64> = HashMap::new();
        for lang in repos.iter().filter_map(|r| r.language.as_deref()) {
            *languages.entry(lang).or_default() += 1;
        }
        let mut top_languages: Vec<(String, u64)> =
            languages.into_iter().map(|(l, n)| (l.to_string(), n)).collect();
        top_languages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_languages.truncate(5);

        let mut sorted: Vec<&GitHubRepo> = repos.iter().collect();
        sorted.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
        let top_repos = sorted
            .into_iter()
            .take(3)
            .map(|r| RepoSummary {
                name: r.name.clone(),
                stars: r.stargazers_count,
                description: r.description.clone().filter(|d| !d.is_empty()),
                language: r.language.clone(),
            })
            .collect();

        let signals = ActivitySignals {
            followers: user.followers,
            total_stars,
            public_repos: user.public_repos,
            recent_events: events.len() as u64,
            push_events: events.iter().filter(|e| e.is_push()).count() as u64,
            has_bio: user.bio_text().is_some(),
        };
        let score = activity_score(&signals, weights);

        Self {
            username: user.login.clone(),
            name: user.display_name().to_string(),
            profile_url: user.profile_url(),
            bio: user.bio_text().map(str::to_string),
            company: user.company.clone().filter(|c| !c.is_empty()),
            location: user.location.clone().filter(|l| !l.is_empty()),
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
            total_stars,
            total_forks,
            recent_stars,
            last_activity,
            recent_events: signals.recent_events,
            push_events: signals.push_events,
            top_languages,
            top_repos,
            activity_score: score,
            rating: ActivityRating::from_score(score),
        }
    }

    /// Share of stars earned by recently pushed repositories.
    #[must_use]
    pub fn recent_star_ratio(&self) -> Option<f64> {
        (self.total_stars > 0).then(|| self.recent_stars as f64 / self.total_stars as f64)
    }
}
