use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use furious_portal::{build_router, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "furious-portal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8787")]
    bind: SocketAddr,

    /// Use the in-memory store and static token auth instead of the managed
    /// services (state dies with the process)
    #[arg(long)]
    memory_store: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Arc::new(Container::new(ContainerConfig {
        memory_store: cli.memory_store,
    }));
    let app = build_router(container);

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!("furious-portal listening on {}", cli.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
