use std::net::SocketAddr;

use anyhow::Result;
use latencyapp::configuration::{Config, CONFIG_FILE};
use latencyapp::logger;
use latencyapp::server::Server;

#[macro_use]
extern crate log;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;
    info!("Starting server...");
    let app = Server::build(Config::load(CONFIG_FILE)?);
    let addr = SocketAddr::from(([0, 0, 0, 0], app.port));
    info!("Listening on '{}'", addr);
    let server = axum::Server::try_bind(&addr).map_err(|e| {
        error!("Failed to start server: {}", e);
        e
    })?;
    server.serve(app.router.into_make_service()).await?;
    Ok(())
}
