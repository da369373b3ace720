use std::time::Duration;

use incidencia_core::error::AppError;
use serde::{Deserialize, Serialize};

use super::Llm;
use crate::ollama::OllamaClient;

const GENERATE_FAILED: &str = "AI_NARRATION_FAILED";

#[derive(Debug, Clone)]
pub struct OllamaLlm {
    client: OllamaClient,
    system: Option<String>,
    timeout: Option<Duration>,
}

impl OllamaLlm {
    pub fn new(client: OllamaClient) -> Self {
        Self {
            client,
            system: None,
            timeout: None,
        }
    }

    /// System message sent alongside every prompt.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Per-call timeout. Without one the call waits as long as the model takes.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[derive(Debug, Clone, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Clone, Deserialize)]
struct OllamaErrorBody {
    error: String,
}

impl Llm for OllamaLlm {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/api/generate", self.client.base_url());
        let req = GenerateRequest {
            model,
            prompt,
            system: self.system.as_deref(),
            stream: false,
        };
        let body = serde_json::to_value(req).map_err(|e| {
            AppError::new(GENERATE_FAILED, "Failed to encode generate request")
                .with_details(e.to_string())
        })?;

        let mut call = ureq::post(&url);
        if let Some(timeout) = self.timeout {
            call = call.timeout(timeout);
        }

        match call.send_json(body) {
            Ok(r) if r.status() == 200 => {
                let v: GenerateResponse = r.into_json().map_err(|e| {
                    AppError::new(GENERATE_FAILED, "Failed to decode generate response")
                        .with_details(e.to_string())
                })?;
                if v.response.trim().is_empty() {
                    return Err(AppError::new(GENERATE_FAILED, "Model response was empty"));
                }
                Ok(v.response)
            }
            Ok(r) => Err(AppError::new(GENERATE_FAILED, "Generate request failed")
                .with_details(format!("status={}", r.status()))),
            Err(ureq::Error::Status(code, r)) => {
                // Ollama reports problems such as an unknown model as `{"error": "..."}`.
                let reason = r
                    .into_json::<OllamaErrorBody>()
                    .map(|b| format!("status={code}; error={}", b.error))
                    .unwrap_or_else(|_| format!("status={code}"));
                Err(AppError::new(GENERATE_FAILED, "Generate request failed").with_details(reason))
            }
            Err(e) => Err(
                AppError::new(GENERATE_FAILED, "Failed to call generate endpoint")
                    .with_details(e.to_string())
                    .with_retryable(true),
            ),
        }
    }

    fn health_check(&self) -> Result<(), AppError> {
        self.client.health_check()
    }
}
