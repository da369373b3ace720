//! IncidencIA server binary.
//!
//! # Environment Variables
//! - `INCIDENCIA_ADDR`: listen address (default: "0.0.0.0:5000")
//! - `INCIDENCIA_DATASET_PATH`: semicolon-delimited incident export (default: "datos.csv")
//! - `INCIDENCIA_OLLAMA_URL`: local Ollama base URL (default: "http://127.0.0.1:11434")
//! - `INCIDENCIA_MODEL`: model name (default: "llama3")
//! - `INCIDENCIA_OLLAMA_TIMEOUT_SECS`: optional per-call model timeout
//! - `RUST_LOG`: tracing filter (default directive: "incidencia_server=info")

use incidencia_server::config::AppConfig;
use incidencia_server::{router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("incidencia_server=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = AppConfig::from_env()?;

    tracing::info!("++ Starting IncidencIA on {}", cfg.addr);
    tracing::info!(
        dataset = %cfg.dataset_path.display(),
        model = %cfg.model,
        ollama = %cfg.ollama.base_url(),
        timeout_secs = cfg.ollama_timeout.map(|d| d.as_secs()),
        "configuration"
    );

    let app = router(AppState::from_config(&cfg));

    let listener = tokio::net::TcpListener::bind(cfg.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
