//! Edge server binary.
//!
//! Binds the listener, announces the listening address and the proxy
//! mapping, then serves until a shutdown signal arrives.

use clap::Parser;
use tokio::net::TcpListener;

use edge_server::config::load_config;
use edge_server::lifecycle::signals;
use edge_server::{EdgeConfig, EdgeServer, Shutdown};

/// Front-end edge server: static assets plus an /api reverse proxy to
/// the Task Service.
#[derive(Parser, Debug)]
#[command(name = "edge-server", version)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => EdgeConfig::default(),
    };

    edge_server::observability::logging::init(&config.observability);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    let url = format!("http://{local_addr}");
    tracing::info!(
        url = %url,
        static_root = %config.static_files.root_dir,
        "Edge server listening"
    );
    tracing::info!(
        prefix = %config.proxy.prefix,
        upstream = %config.proxy.upstream,
        "Task Service proxy mapping"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown));

    let server = EdgeServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
