use incidencia_core::domain::IncidentRecord;
use incidencia_core::error::AppError;
use incidencia_core::render::format_incident_for_model;
use serde::{Deserialize, Serialize};

use crate::llm::Llm;

mod prompts;

pub use prompts::{client_incident_question, incident_narration_prompt, NARRATION_SYSTEM_MESSAGE};

pub const DEFAULT_MODEL: &str = "llama3";

/// Rendered incident text plus the question asked about it. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NarrationRequest {
    pub incident_data: String,
    pub question: String,
}

impl NarrationRequest {
    /// The fixed per-client request: rendered record and the canned question for its ID.
    pub fn for_record(record: &IncidentRecord) -> Self {
        Self {
            incident_data: format_incident_for_model(record),
            question: client_incident_question(&record.client_id),
        }
    }
}

/// Single attempt; any model failure is returned as-is with its diagnostics.
pub fn narrate(llm: &dyn Llm, model: &str, req: &NarrationRequest) -> Result<String, AppError> {
    let prompt = incident_narration_prompt(&req.incident_data, &req.question);
    let text = llm.generate(model, &prompt)?;

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::new(
            "AI_NARRATION_EMPTY",
            "El modelo devolvió una respuesta vacía",
        ));
    }
    Ok(text.to_string())
}

pub fn narrate_incident(
    llm: &dyn Llm,
    model: &str,
    record: &IncidentRecord,
) -> Result<String, AppError> {
    narrate(llm, model, &NarrationRequest::for_record(record))
}
