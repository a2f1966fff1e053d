//! healthai-server binary.
//!
//! Usage:
//!   healthai-server [--host <host>] [--port <port>] [--config <file>]
//!                   [--log-level <level>] [--json-logs]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use healthai_core::config::CliOverrides;
use healthai_core::tracing::init_tracing;
use healthai_core::HealthAiConfig;

#[derive(Parser)]
#[command(name = "healthai-server")]
#[command(version)]
#[command(about = "Health risk prediction and symptom triage over HTTP", long_about = None)]
struct Cli {
    /// Bind host (default 0.0.0.0)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (default 8000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Config file; defaults to ./healthai.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,

    /// Emit JSON log lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        host: cli.host,
        port: cli.port,
        log_level: cli.log_level,
        json_logs: cli.json_logs.then_some(true),
    };

    let config = match &cli.config {
        Some(path) => HealthAiConfig::load_file(path, Some(&overrides)),
        None => HealthAiConfig::load(&std::env::current_dir()?, Some(&overrides)),
    }
    .context("failed to load configuration")?;

    init_tracing(
        config.observability.effective_log_level(),
        config.observability.effective_json_logs(),
    );

    healthai_server::serve(&config).await?;
    Ok(())
}
