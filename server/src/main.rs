mod config;
mod error;
mod routes;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portal-server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "portal-server listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
