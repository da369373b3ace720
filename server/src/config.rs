//! Process configuration.
//!
//! Every setting has a default matching the historical fixed values, so an empty environment
//! yields a working local setup: `datos.csv` in the working directory, `llama3` on the local
//! Ollama, listening on `0.0.0.0:5000`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use incidencia_ai::narrate::DEFAULT_MODEL;
use incidencia_ai::ollama::{OllamaClient, DEFAULT_OLLAMA_URL};
use incidencia_core::error::AppError;

pub const ENV_ADDR: &str = "INCIDENCIA_ADDR";
pub const ENV_DATASET_PATH: &str = "INCIDENCIA_DATASET_PATH";
pub const ENV_OLLAMA_URL: &str = "INCIDENCIA_OLLAMA_URL";
pub const ENV_MODEL: &str = "INCIDENCIA_MODEL";
pub const ENV_OLLAMA_TIMEOUT_SECS: &str = "INCIDENCIA_OLLAMA_TIMEOUT_SECS";

pub const DEFAULT_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DATASET_PATH: &str = "datos.csv";

const CONFIG_INVALID: &str = "CONFIG_INVALID";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub dataset_path: PathBuf,
    pub ollama: OllamaClient,
    pub model: String,
    /// `None` means the model call may take as long as it needs.
    pub ollama_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys take their defaults; set-but-blank keys
    /// are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str, default: &str| -> Result<String, AppError> {
            match lookup(key) {
                None => Ok(default.to_string()),
                Some(v) if v.trim().is_empty() => Err(AppError::new(
                    CONFIG_INVALID,
                    format!("{key} must not be empty"),
                )),
                Some(v) => Ok(v.trim().to_string()),
            }
        };

        let addr_raw = get(ENV_ADDR, DEFAULT_ADDR)?;
        let addr = addr_raw.parse::<SocketAddr>().map_err(|e| {
            AppError::new(CONFIG_INVALID, format!("{ENV_ADDR} is not a socket address"))
                .with_details(format!("value={addr_raw}; err={e}"))
        })?;

        let dataset_path = PathBuf::from(get(ENV_DATASET_PATH, DEFAULT_DATASET_PATH)?);
        let ollama = OllamaClient::new(&get(ENV_OLLAMA_URL, DEFAULT_OLLAMA_URL)?)?;
        let model = get(ENV_MODEL, DEFAULT_MODEL)?;
        let ollama_timeout = parse_timeout(lookup(ENV_OLLAMA_TIMEOUT_SECS))?;

        Ok(Self {
            addr,
            dataset_path,
            ollama,
            model,
            ollama_timeout,
        })
    }
}

fn parse_timeout(raw: Option<String>) -> Result<Option<Duration>, AppError> {
    let Some(raw) = raw else { return Ok(None) };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        Ok(_) => Err(AppError::new(
            CONFIG_INVALID,
            format!("{ENV_OLLAMA_TIMEOUT_SECS} must be greater than zero"),
        )),
        Err(e) => Err(AppError::new(
            CONFIG_INVALID,
            format!("{ENV_OLLAMA_TIMEOUT_SECS} must be a whole number of seconds"),
        )
        .with_details(format!("value={raw}; err={e}"))),
    }
}
