//! HTTP server for the pitch speed equivalency calculator.
//!
//! Serves the single-page chart at `/` and the JSON API under `/api`.
//!
//! ```bash
//! pitch-equiv-server --port 3000
//! pitch-equiv-server --config calculator.json
//! RUST_LOG=pitch_equiv=debug pitch-equiv-server
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use pitch_equiv::services::run_server;
use pitch_equiv::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pitch-equiv-server",
    about = "Pitch speed equivalency calculator web server"
)]
struct Args {
    /// Port to listen on (overrides the config file)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// JSON config file; missing fields use defaults
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(port) = args.port {
        config.web.port = port;
    }
    if !config.web.enabled {
        bail!("web server is disabled in the configuration");
    }

    info!(
        title = %config.app.title,
        port = config.web.port,
        "starting {}",
        env!("CARGO_PKG_NAME")
    );
    run_server(config).await.context("web server failed")
}
