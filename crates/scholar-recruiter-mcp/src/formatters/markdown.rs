//! Markdown output formatting.

use crate::models::{
    Author, CitationContext, CompositeProfile, GitHubProfile, GitHubUser, IdentityMatch, Paper,
    RisingStar, VenueAuthor,
};
use crate::venues::VenueTable;

/// Truncate text to `max` characters with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Format a page of papers as Markdown.
///
/// `total` is the match count reported by the API, if any.
#[must_use]
pub fn format_papers_markdown(papers: &[Paper], total: Option<i64>) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = match total {
        Some(total) => format!("# Papers ({} shown of {total})\n\n", papers.len()),
        None => format!("# Papers ({} results)\n\n", papers.len()),
    };

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper as Markdown.
#[must_use]
pub fn format_paper_markdown(paper: &Paper, index: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("## {}. {}\n\n", index, paper.title_or_default()));

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", paper.author_names_short(5)));
    }

    let mut meta = Vec::new();
    if let Some(year) = paper.year {
        meta.push(format!("**Year**: {year}"));
    }
    meta.push(format!("**Citations**: {}", paper.citations()));
    if let Some(venue) = paper.venue_name() {
        meta.push(format!("**Venue**: {venue}"));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    let links = paper_links(paper);
    if !links.is_empty() {
        output.push_str(&format!("**Links**: {}\n\n", links.join(" | ")));
    }

    if let Some(pdf_url) = paper.pdf_url() {
        output.push_str(&format!("**PDF**: [Open Access]({pdf_url})\n\n"));
    }

    if let Some(abs) = paper.r#abstract.as_deref().filter(|a| !a.is_empty()) {
        output.push_str(&format!("**Abstract**: {}\n", truncate(abs, 300)));
    }

    output
}

fn paper_links(paper: &Paper) -> Vec<String> {
    let mut ids = Vec::new();
    if let Some(doi) = paper.doi() {
        ids.push(format!("[DOI](https://doi.org/{doi})"));
    }
    if let Some(arxiv) = paper.arxiv_id() {
        ids.push(format!("[arXiv](https://arxiv.org/abs/{arxiv})"));
    }
    if let Some(id) = paper.id() {
        ids.push(format!("[S2](https://www.semanticscholar.org/paper/{id})"));
    }
    ids
}

/// Format the paper detail view.
#[must_use]
pub fn format_paper_detail_markdown(paper: &Paper) -> String {
    let mut output = format!("# {}\n\n", paper.title_or_default());

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", paper.author_names()));
    }

    let mut meta = Vec::new();
    if let Some(year) = paper.year {
        meta.push(format!("**Year**: {year}"));
    }
    if let Some(venue) = paper.venue_name() {
        meta.push(format!("**Venue**: {venue}"));
    }
    meta.push(format!("**Citations**: {}", paper.citations()));
    meta.push(format!("**Influential**: {}", paper.influential_citations()));
    if let Some(refs) = paper.reference_count {
        meta.push(format!("**References**: {refs}"));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    let categories = paper.s2_categories();
    if !categories.is_empty() {
        output.push_str(&format!("**Fields**: {}\n\n", categories.join(", ")));
    } else if let Some(fields) = paper.fields_of_study.as_ref().filter(|f| !f.is_empty()) {
        output.push_str(&format!("**Fields**: {}\n\n", fields.join(", ")));
    }

    let links = paper_links(paper);
    if !links.is_empty() {
        output.push_str(&format!("**Links**: {}\n\n", links.join(" | ")));
    }

    if let Some(pdf_url) = paper.pdf_url() {
        output.push_str(&format!("**PDF**: [Open Access]({pdf_url})\n\n"));
    }

    if let Some(tldr) = paper.tldr_text() {
        output.push_str(&format!("> **TLDR**: {tldr}\n\n"));
    }

    if let Some(abs) = paper.r#abstract.as_deref().filter(|a| !a.is_empty()) {
        output.push_str(&format!("## Abstract\n\n{abs}\n"));
    }

    output
}

/// Format papers citing `paper_id`.
#[must_use]
pub fn format_citations_markdown(paper_id: &str, citations: &[CitationContext]) -> String {
    let citing: Vec<&Paper> = citations.iter().filter_map(|c| c.paper.as_ref()).collect();
    if citing.is_empty() {
        return format!("No citations found for paper {paper_id}.");
    }

    let mut output = format!("# Citations of {paper_id} ({} shown)\n\n", citing.len());
    for (i, ctx) in citations.iter().filter(|c| c.paper.is_some()).enumerate() {
        let Some(paper) = &ctx.paper else { continue };
        let marker = if ctx.is_influential == Some(true) { " (influential)" } else { "" };
        let year = paper.year.map_or_else(|| "n.d.".to_string(), |y| y.to_string());
        output.push_str(&format!(
            "{}. **{}**{marker} ({year}) - {} citations\n",
            i + 1,
            paper.title_or_default(),
            paper.citations()
        ));
        if !paper.authors.is_empty() {
            output.push_str(&format!("   {}\n", paper.author_names_short(3)));
        }
    }

    output
}

/// Format a list of authors as Markdown.
#[must_use]
pub fn format_authors_markdown(authors: &[Author]) -> String {
    if authors.is_empty() {
        return "No authors found.".to_string();
    }

    let mut output = format!("# Authors ({} results)\n\n", authors.len());

    for (i, author) in authors.iter().enumerate() {
        output.push_str(&format_author_markdown_indexed(author, i + 1));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single author, with up to `top_papers` most cited papers.
#[must_use]
pub fn format_author_markdown(author: &Author, top_papers: usize) -> String {
    let mut output = format_author_markdown_indexed(author, 0);

    if !author.aliases.is_empty() {
        output.push_str(&format!("\n**Also known as**: {}\n", author.aliases.join(", ")));
    }

    let top = author.top_papers(top_papers);
    if !top.is_empty() {
        output.push_str("\n### Top papers\n\n");
        for paper in top {
            let year = paper.year.map_or_else(|| "n.d.".to_string(), |y| y.to_string());
            output.push_str(&format!(
                "- {} ({year}) - {} citations\n",
                paper.title_or_default(),
                paper.citations()
            ));
        }
    }

    output
}

fn format_author_markdown_indexed(author: &Author, index: usize) -> String {
    let mut output = String::new();

    if index > 0 {
        output.push_str(&format!("## {}. {}\n\n", index, author.name_or_default()));
    } else {
        output.push_str(&format!("## {}\n\n", author.name_or_default()));
    }

    if !author.affiliations.is_empty() {
        output.push_str(&format!("**Affiliations**: {}\n\n", author.affiliations.join(", ")));
    }

    output.push_str(&format!(
        "**h-index**: {} | **Citations**: {} | **Papers**: {}\n\n",
        author.h_index_value(),
        author.citations(),
        author.papers_count()
    ));

    if let Some(orcid) = author.orcid() {
        output.push_str(&format!("**ORCID**: [{orcid}](https://orcid.org/{orcid})\n\n"));
    }

    if let Some(homepage) = &author.homepage {
        output.push_str(&format!("**Homepage**: [{homepage}]({homepage})\n\n"));
    }

    output.push_str(&format!(
        "**S2 Profile**: [View](https://www.semanticscholar.org/author/{})\n",
        author.author_id
    ));

    output
}

/// Format a batch lookup: found authors followed by unresolved IDs.
#[must_use]
pub fn format_batch_markdown(found: &[Author], not_found: &[String]) -> String {
    let mut output = format_authors_markdown(found);
    if !not_found.is_empty() {
        output.push_str(&format!("\n**Not found**: {}\n", not_found.join(", ")));
    }
    output
}

/// Format authors ranked at a venue.
#[must_use]
pub fn format_venue_authors_markdown(
    venue: &str,
    year_from: i32,
    authors: &[VenueAuthor],
) -> String {
    if authors.is_empty() {
        return format!("No authors found at {venue} since {year_from}.");
    }

    let mut output = format!("# Top authors at {venue} (since {year_from})\n\n");
    output.push_str(
        "| # | Author | Venue papers | Venue citations | Years | h-index | Affiliation |\n",
    );
    output.push_str("|---|---|---|---|---|---|---|\n");

    for (i, author) in authors.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            i + 1,
            author.name,
            author.venue_papers,
            author.venue_citations,
            author.year_range(),
            author.h_index.map_or_else(|| "-".to_string(), |h| h.to_string()),
            author.affiliation.as_deref().unwrap_or("-")
        ));
    }

    output
}

/// Format rising-star candidates.
#[must_use]
pub fn format_rising_stars_markdown(topic: &str, stars: &[RisingStar]) -> String {
    if stars.is_empty() {
        return format!("No rising stars found for '{topic}'.");
    }

    let mut output = format!("# Rising stars in {topic} ({} found)\n\n", stars.len());

    for (i, star) in stars.iter().enumerate() {
        output.push_str(&format!("## {}. {}\n\n", i + 1, star.name));
        output.push_str(&format!(
            "**Score**: {:.1} | **h-index**: {} | **Recent citations**: {} | \
             **Total citations**: {}\n\n",
            star.score,
            star.h_index,
            star.recent_citations,
            star.total_citations
        ));
        if let Some(affiliation) = &star.affiliation {
            output.push_str(&format!("**Affiliation**: {affiliation}\n\n"));
        }
        if let Some(homepage) = &star.homepage {
            output.push_str(&format!("**Homepage**: [{homepage}]({homepage})\n\n"));
        }
        if let Some(top) = star.top_paper() {
            output.push_str(&format!(
                "**Top recent paper**: {} ({} citations)\n\n",
                top.title,
                top.citations
            ));
        }
        output.push_str(&format!(
            "**S2 Profile**: [View](https://www.semanticscholar.org/author/{})\n\n",
            star.author_id
        ));
    }

    output
}

/// Format GitHub users found by name search.
#[must_use]
pub fn format_github_users_markdown(name: &str, users: &[GitHubUser]) -> String {
    if users.is_empty() {
        return format!("No GitHub users found matching '{name}'.");
    }

    let mut output = format!("# GitHub users matching '{name}' ({})\n\n", users.len());
    for (i, user) in users.iter().enumerate() {
        output.push_str(&format!("## {}. {} (@{})\n\n", i + 1, user.display_name(), user.login));
        if let Some(bio) = user.bio_text() {
            output.push_str(&format!("{}\n\n", truncate(bio, 200)));
        }
        let mut meta = vec![
            format!("**Followers**: {}", user.followers),
            format!("**Repos**: {}", user.public_repos),
        ];
        if let Some(company) = user.company.as_deref().filter(|c| !c.is_empty()) {
            meta.push(format!("**Company**: {company}"));
        }
        if let Some(location) = user.location.as_deref().filter(|l| !l.is_empty()) {
            meta.push(format!("**Location**: {location}"));
        }
        output.push_str(&format!("{}\n\n", meta.join(" | ")));
        output.push_str(&format!("**Profile**: {}\n\n", user.profile_url()));
    }
    output
}

/// Format a GitHub activity profile.
#[must_use]
pub fn format_github_profile_markdown(profile: &GitHubProfile) -> String {
    let mut output = format!("# {} (@{})\n\n", profile.name, profile.username);

    output.push_str(&format!(
        "**Activity score**: {}/100 ({})\n\n",
        profile.activity_score,
        profile.rating.description()
    ));

    if let Some(bio) = &profile.bio {
        output.push_str(&format!("> {bio}\n\n"));
    }

    let mut meta = Vec::new();
    if let Some(company) = &profile.company {
        meta.push(format!("**Company**: {company}"));
    }
    if let Some(location) = &profile.location {
        meta.push(format!("**Location**: {location}"));
    }
    if !meta.is_empty() {
        output.push_str(&format!("{}\n\n", meta.join(" | ")));
    }

    output.push_str("## Metrics\n\n");
    output.push_str(&format!(
        "- Followers: {} (following {})\n",
        profile.followers,
        profile.following
    ));
    output.push_str(&format!("- Public repos: {}\n", profile.public_repos));
    output.push_str(&format!(
        "- Stars: {} total, {} on recently pushed repos\n",
        profile.total_stars,
        profile.recent_stars
    ));
    output.push_str(&format!("- Forks: {}\n", profile.total_forks));
    output.push_str(&format!(
        "- Recent events: {} ({} pushes)\n",
        profile.recent_events,
        profile.push_events
    ));
    if let Some(last) = profile.last_activity {
        output.push_str(&format!("- Last activity: {}\n", last.format("%Y-%m-%d")));
    }

    if !profile.top_languages.is_empty() {
        let langs: Vec<String> =
            profile.top_languages.iter().map(|(l, n)| format!("{l} ({n})")).collect();
        output.push_str(&format!("\n**Languages**: {}\n", langs.join(", ")));
    }

    if !profile.top_repos.is_empty() {
        output.push_str("\n## Top repositories\n\n");
        for repo in &profile.top_repos {
            let lang = repo.language.as_deref().map(|l| format!(" [{l}]")).unwrap_or_default();
            output.push_str(&format!("- **{}**{lang} - {} stars", repo.name, repo.stars));
            if let Some(desc) = &repo.description {
                output.push_str(&format!(": {}", truncate(desc, 100)));
            }
            output.push('\n');
        }
    }

    output.push_str(&format!("\n**Profile**: {}\n", profile.profile_url));

    output
}

/// Format a merged academic and GitHub profile.
#[must_use]
pub fn format_composite_markdown(profile: &CompositeProfile) -> String {
    let mut output = format!("# Researcher profile: {}\n\n", profile.query_name);

    output.push_str("## Scores\n\n");
    output.push_str(&format!(
        "- Academic: {}/100 ({})\n",
        profile.academic_score,
        profile.academic_tier.label()
    ));
    match profile.github_score {
        Some(score) => output.push_str(&format!("- GitHub: {score}/100\n")),
        None => output.push_str("- GitHub: not provided\n"),
    }
    output.push_str(&format!("- **Composite: {}/100**\n", profile.composite_score));

    if let Some(verdict) = profile.identity_match {
        let label = match verdict {
            IdentityMatch::Exact => "exact name match",
            IdentityMatch::Substring => "partial name match",
            IdentityMatch::None => "names do not match, verify manually",
        };
        output.push_str(&format!("- Identity: {label}\n"));
    }

    output.push_str("\n## Academic\n\n");
    output.push_str(&format_author_markdown(&profile.academic, 5));

    if let Some(github) = &profile.github {
        output.push_str("\n## GitHub\n\n");
        output.push_str(&format_github_profile_markdown(github));
    }

    output
}

/// Format the venue shortcut table grouped by category.
#[must_use]
pub fn format_venues_markdown(table: &VenueTable) -> String {
    let mut output = format!("# ML venues ({} shortcuts)\n\n", table.len());

    for (category, entries) in table.by_category() {
        output.push_str(&format!("## {category}\n\n"));
        for entry in entries {
            output.push_str(&format!("- `{}` - {}\n", entry.shortcut, entry.canonical()));
        }
        output.push('\n');
    }

    output.push_str(
        "Use a shortcut as the `venue` argument of `search_papers` or `find_venue_top_authors`.\n",
    );
    output
}
