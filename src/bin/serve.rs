//! Tic-tac-toe move service (HTTP).

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let app = tictactoe_web::server::router();

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!(port, "move service ready at http://localhost:{}/", port);

    axum::serve(listener, app).await?;

    Ok(())
}
