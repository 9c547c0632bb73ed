//! Scholar Recruiter MCP Server - Entry Point
//!
//! Serves MCP over stdio. Logs are written to stderr.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_recruiter_mcp::{config::Config, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "scholar-recruiter-mcp")]
#[command(about = "MCP server for researcher discovery over Semantic Scholar and GitHub")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "S2_API_KEY", hide_env_values = true)]
    s2_api_key: Option<String>,

    /// GitHub token (required by the GitHub tools)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    // stdout carries the protocol
    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env values become visible to clap's env fallbacks
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = Config::from_env()?.with_credentials(cli.s2_api_key, cli.github_token);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        s2_api_key = config.has_s2_api_key(),
        github_token = config.has_github_token(),
        "Starting Scholar Recruiter MCP server"
    );

    let server = McpServer::from_config(&config)?;
    server.run_stdio().await?;

    Ok(())
}
