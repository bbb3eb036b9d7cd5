use std::sync::Arc;

use clap::Parser;

use tinyhttpd::config::{Cli, Config};
use tinyhttpd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = Arc::new(Config::from_cli(cli)?);

    tokio::select! {
        res = server::listener::run(Arc::clone(&cfg)) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
