//! Service entry point: wires the store actor to both transports.

use product_service::config::ServiceConfig;
use product_service::lifecycle::ProductSystem;
use product_service::transport::{http, tcp::CommandListener};
use store_actor::tracing::setup_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ServiceConfig::from_env()?;
    info!(?config, "Starting product service");

    let system = ProductSystem::new();

    // Command-message channel (add_product / get_products).
    let command_listener =
        CommandListener::bind(config.tcp_addr, system.product_client.clone()).await?;
    info!(addr = %config.tcp_addr, "Command channel listening");
    tokio::spawn(command_listener.run());

    // HTTP routes (GET/PATCH/DELETE /{id}).
    let http_listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    info!(addr = %config.http_addr, "HTTP listening");
    axum::serve(http_listener, http::router(system.product_client.clone())).await?;

    Ok(())
}
