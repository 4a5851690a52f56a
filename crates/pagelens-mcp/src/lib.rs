//! PageLens MCP server: scanability and accessibility checks as MCP tools.

pub mod config;
pub mod prompts;
pub mod protocol;
pub mod repl;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::FetchConfig;
pub use protocol::ProtocolHandler;
pub use transport::StdioTransport;

use pagelens::PageAnalyzer;

/// Build the analyzer every transport shares.
pub fn build_analyzer(config: &FetchConfig) -> PageAnalyzer {
    tracing::debug!(
        timeout_ms = config.timeout_ms,
        user_agent = %config.user_agent,
        "Configuring page fetcher"
    );
    PageAnalyzer::http(config.timeout_ms, &config.user_agent)
}
