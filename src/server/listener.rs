use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the configured address and accepts connections until the process
/// exits. Each connection gets its own task and exactly one exchange;
/// accept failures are logged and the loop keeps going.
pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(cfg.listen_addr()).await?;
    info!(
        "Listening on {} (mode={}, root={})",
        cfg.listen_addr(),
        cfg.mode,
        cfg.asset_root.display()
    );

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Accept failed: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let config = Arc::clone(&cfg);
        tokio::spawn(async move {
            let conn = Connection::new(socket, config);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
