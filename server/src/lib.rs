//! IncidencIA HTTP service.
//!
//! One endpoint, `POST /consultar_incidencia`, looks up a client's incident in the CSV export and
//! returns a Spanish narration of it produced by the local model. All state a handler needs lives
//! in [`AppState`], built once at startup.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use incidencia_ai::llm::ollama_llm::OllamaLlm;
use incidencia_ai::llm::Llm;
use incidencia_ai::narrate::NARRATION_SYSTEM_MESSAGE;
use incidencia_core::domain::Dataset;
use incidencia_core::error::AppError;
use incidencia_core::repo::IncidentRepository;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

pub mod api_error;
pub mod config;
pub mod routes;

use config::AppConfig;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<IncidentRepository>,
    pub llm: Arc<dyn Llm>,
    pub model: Arc<str>,
}

impl AppState {
    pub fn new(repository: IncidentRepository, llm: Arc<dyn Llm>, model: &str) -> Self {
        Self {
            repository: Arc::new(repository),
            llm,
            model: Arc::from(model),
        }
    }

    /// Production wiring: lazily loaded CSV plus the local Ollama model.
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self::new(
            IncidentRepository::new(cfg.dataset_path.clone()),
            Arc::new(narration_llm(cfg)),
            &cfg.model,
        )
    }

    /// Loaded dataset; the first caller pays for the file read, on the blocking pool.
    pub async fn dataset(&self) -> Result<Arc<Dataset>, AppError> {
        let repo = self.repository.clone();
        let first_use = !repo.is_initialised();
        let result = run_blocking(move || repo.dataset()).await;
        if first_use {
            let path = self.repository.path().display().to_string();
            match &result {
                Ok(ds) => tracing::info!(path = %path, rows = ds.len(), "dataset loaded"),
                Err(e) => tracing::error!(
                    path = %path,
                    details = e.details.as_deref().unwrap_or(""),
                    "dataset load failed; requests will fail until restart"
                ),
            }
        }
        result
    }
}

/// Ollama model configured for narration: Spanish system message plus the configured timeout.
pub fn narration_llm(cfg: &AppConfig) -> OllamaLlm {
    OllamaLlm::new(cfg.ollama.clone())
        .with_system(NARRATION_SYSTEM_MESSAGE)
        .with_timeout(cfg.ollama_timeout)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/consultar_incidencia", post(routes::consultar_incidencia))
        .route("/health", get(routes::health))
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(api_error::panic_response))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run blocking work off the async executor. A panic in `f` comes back as an unexpected error.
pub async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::unexpected(e.to_string()))?
}
