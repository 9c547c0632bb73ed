//! MCP server implementation.
//!
//! Only the stdio transport is provided; the process serves one client over
//! its standard streams and exits when stdin closes.

pub mod protocol;
pub mod stdio;

use crate::config::Config;
use crate::tools::{self, McpTool, ToolContext};

/// MCP server for researcher discovery.
pub struct McpServer {
    /// Tool execution context.
    ctx: ToolContext,

    /// Registered tools.
    tools: Vec<Box<dyn McpTool>>,
}

impl McpServer {
    /// Create a server with all tools registered.
    #[must_use]
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx, tools: tools::register_all_tools() }
    }

    /// Build the clients from configuration and create the server.
    ///
    /// # Errors
    ///
    /// Returns error if an HTTP client cannot be initialized.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(ToolContext::from_config(config)?))
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!(
            tools = self.tools.len(),
            github = self.ctx.has_github(),
            "Registered tools"
        );

        stdio::run_stdio(&self.tools, &self.ctx).await
    }

    /// Registered tools.
    #[must_use]
    pub fn tools(&self) -> &[Box<dyn McpTool>] {
        &self.tools
    }

    /// Get tool context for execution.
    #[must_use]
    pub const fn context(&self) -> &ToolContext {
        &self.ctx
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &self.tools.len()).finish()
    }
}
