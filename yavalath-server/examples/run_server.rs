//! Standalone Yavalath server with an optional display config
//!
//! Run with: cargo run -p yavalath-server --example run_server -- [display.json] [static_dir]

use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use yavalath_core::DisplayConfig;
use yavalath_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let display = match args.next() {
        Some(path) => DisplayConfig::load(Path::new(&path))
            .with_context(|| format!("Failed to load display config: {}", path))?,
        None => DisplayConfig::default(),
    };
    let mut config = ServerConfig {
        display,
        ..ServerConfig::default()
    };
    if let Some(static_dir) = args.next() {
        config.static_dir = static_dir;
    }

    let layout = config.display.layout();
    tracing::info!(
        "Board centered at ({:.0}, {:.0}), cell radius {}",
        layout.origin.x,
        layout.origin.y,
        layout.circumradius
    );
    println!("Open http://localhost:{}/", config.port);

    run_server(config).await
}
