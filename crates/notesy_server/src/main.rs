//! `notesy-server` entry point.
//!
//! # Responsibility
//! - Resolve args/env into explicit configs once at startup.
//! - Start exactly one transport, chosen by subcommand.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use notesy_core::{init_logging, NotesyConfig, OsaScriptRunner, ScriptRunner};
use notesy_server::mcp::serve_stdio;
use notesy_server::routes::{serve_http, AppState};
use notesy_server::{shared_service, HttpConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notesy-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Natural language Apple Notes requests over HTTP or MCP stdio")]
struct Cli {
    #[command(flatten)]
    runtime: RuntimeArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RuntimeArgs {
    /// trace|debug|info|warn|error
    #[arg(long, env = "NOTESY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = "NOTESY_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Script interpreter (defaults to osascript)
    #[arg(long, env = "NOTESY_OSASCRIPT")]
    osascript: Option<PathBuf>,

    /// Directory for temporary script files
    #[arg(long, env = "NOTESY_SCRIPT_DIR")]
    script_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve POST /process-note-request
    Http {
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,
    },

    /// Serve the process_note_request tool over stdio
    Mcp,
}

impl Commands {
    fn component(&self) -> &'static str {
        match self {
            Commands::Http { .. } => "http",
            Commands::Mcp => "mcp",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = NotesyConfig::from_overrides(
        cli.runtime.log_level.as_deref(),
        cli.runtime.log_dir.as_deref(),
        cli.runtime.osascript.as_deref(),
        cli.runtime.script_dir.as_deref(),
    );

    init_logging(&config.log, cli.command.component()).map_err(anyhow::Error::msg)?;
    config.runner.prepare().map_err(anyhow::Error::msg)?;

    let runner: Box<dyn ScriptRunner> = Box::new(OsaScriptRunner::from_config(&config.runner));
    let service = shared_service(runner);

    match cli.command {
        Commands::Http { host, port } => {
            serve_http(HttpConfig { host, port }, AppState::new(service)).await
        }
        Commands::Mcp => serve_stdio(service).await,
    }
}
