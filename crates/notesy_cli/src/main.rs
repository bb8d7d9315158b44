//! `notesy` interactive console.

mod console;

use anyhow::Result;
use clap::Parser;
use notesy_core::{init_logging, NoteRequestService, NotesyConfig, OsaScriptRunner};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notesy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Type note requests in plain English; they run against Apple Notes")]
struct Cli {
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

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = NotesyConfig::from_overrides(
        cli.log_level.as_deref(),
        cli.log_dir.as_deref(),
        cli.osascript.as_deref(),
        cli.script_dir.as_deref(),
    );

    // The console still works without a log file.
    if let Err(err) = init_logging(&config.log, "cli") {
        eprintln!("warning: logging disabled: {err}");
    }
    config.runner.prepare().map_err(anyhow::Error::msg)?;

    let service = NoteRequestService::new(OsaScriptRunner::from_config(&config.runner));
    console::run(&service)
}
