use dotenvy::dotenv;
use tracing::info;

use videogen_backend::{app, config, state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting server...");

    let config = config::settings::AppConfig::from_env();
    let port = config.server_port;
    let state = state::AppState::from_config(config);

    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
