use std::sync::Arc;

use tokio::signal;
use tracing::info;

use stone_persistence::StoreHandle;
use stone_persistence::connection::connect_and_migrate;
use stone_server::{config::Config, create_routes};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting SuiStone game server...");

    let config = Config::new();

    // A missing store is degraded mode, not a startup failure: the games stay
    // playable on fallback content while persistence is down.
    let store = match connect_and_migrate().await {
        Ok(db) => {
            info!("Connected to database and ran migrations");
            StoreHandle::connected(db)
        }
        Err(err) => {
            tracing::warn!(
                "Database unavailable, serving fallback content without persistence: {}",
                err
            );
            StoreHandle::disconnected()
        }
    };

    let routes = create_routes(Arc::new(store), Arc::new(config.clone()));

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config.host.parse::<std::net::IpAddr>().unwrap(),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
