//! PageLens MCP server entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use pagelens_mcp::config::FetchConfig;
use pagelens_mcp::protocol::ProtocolHandler;
use pagelens_mcp::tools::ToolRegistry;
use pagelens_mcp::transport::StdioTransport;

#[derive(Parser)]
#[command(
    name = "pagelens-mcp",
    about = "MCP server for PageLens — scanability and accessibility checks for any web page",
    version
)]
struct Cli {
    /// HTTP timeout for page fetches, in milliseconds.
    /// Also reads from PAGELENS_TIMEOUT_MS.
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// User-Agent header sent with page fetches.
    /// Also reads from PAGELENS_USER_AGENT.
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Start MCP server over HTTP.
    #[cfg(feature = "sse")]
    ServeHttp {
        /// Listen address (host:port).
        #[arg(long, default_value = "127.0.0.1:3100")]
        addr: String,

        /// Bearer token for authentication.
        /// Also reads from PAGELENS_TOKEN.
        #[arg(long)]
        token: Option<String>,
    },

    /// Fetch a page and print its density and accessibility report as JSON.
    Analyze {
        /// Absolute http(s) URL of the page.
        url: String,
    },

    /// Print server capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   pagelens-mcp completions bash > ~/.local/share/bash-completion/completions/pagelens-mcp
    ///   pagelens-mcp completions zsh > ~/.zfunc/_pagelens-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = FetchConfig::resolve(cli.timeout_ms, cli.user_agent.as_deref());

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            tracing::info!("PageLens MCP server (stdio)");
            let handler = ProtocolHandler::new(pagelens_mcp::build_analyzer(&config));
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        #[cfg(feature = "sse")]
        Commands::ServeHttp { addr, token } => {
            use pagelens_mcp::transport::SseTransport;

            let effective_token = pagelens_mcp::config::resolve_token(token);
            tracing::info!("PageLens MCP server (http)");
            if effective_token.is_some() {
                tracing::info!("Auth: bearer token required");
            }

            let handler = ProtocolHandler::new(pagelens_mcp::build_analyzer(&config));
            let transport = SseTransport::new(handler, effective_token);
            transport.run(&addr).await?;
        }

        Commands::Analyze { url } => {
            let analyzer = pagelens_mcp::build_analyzer(&config);
            match analyzer.report(&url).await {
                Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
                Err(e) => {
                    eprintln!("Analysis failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Info => {
            let capabilities = pagelens_mcp::types::InitializeResult::default_result();
            let tools = ToolRegistry::list_tools();
            let info = serde_json::json!({
                "server": capabilities.server_info,
                "protocol_version": capabilities.protocol_version,
                "capabilities": capabilities.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
                "fetch": {
                    "timeout_ms": config.timeout_ms,
                    "user_agent": config.user_agent,
                },
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "pagelens-mcp", &mut std::io::stdout());
        }

        Commands::Repl => {
            let analyzer = pagelens_mcp::build_analyzer(&config);
            let runtime = tokio::runtime::Handle::current();
            tokio::task::block_in_place(|| pagelens_mcp::repl::run(analyzer, runtime))?;
        }
    }

    Ok(())
}
