mod config;
mod routes;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::ServerConfig::from_env()?;
    let state = state::AppState::new(&cfg.backend)?;
    let app = routes::leptos_app(state)?;

    let addr = cfg.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, backend = %cfg.backend.base_url, "buildchat listening");
    axum::serve(listener, app).await?;
    Ok(())
}
