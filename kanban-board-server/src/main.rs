use anyhow::Context;
use clap::Parser;
use kanban_board_server::{logging, router, AppState, ServerConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

/// Serve the kanban board HTTP API
#[derive(Debug, Parser)]
#[command(name = "kanban-board-server", version, about)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON); defaults to kanban-board.* in the working directory
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, value_name = "ADDR")]
    bind: Option<SocketAddr>,

    /// Root directory of the file tables
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.bind, cli.data_dir);
    logging::init(&config.log_filter);

    let board = config.open_board();
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        storage = ?config.storage,
        data_dir = %config.data_dir.display(),
        "kanban board server listening"
    );

    axum::serve(listener, router(AppState::new(board)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("kanban board server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
    }
}
