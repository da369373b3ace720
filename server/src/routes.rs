use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use incidencia_ai::narrate::narrate_incident;
use incidencia_core::error::{AppError, INCIDENT_NOT_FOUND, VALIDATION_CLIENT_ID_REQUIRED};
use incidencia_core::lookup::find_by_client_id;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api_error::ApiError;
use crate::AppState;

/// Body field carrying the client identifier.
pub const CLIENT_ID_FIELD: &str = "ID Cliente";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsultaResponse {
    pub respuesta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
    pub model_reachable: bool,
}

/// `POST /consultar_incidencia`
///
/// Validates the body before touching the dataset, so a missing ID is a 400 even when the
/// dataset cannot be loaded.
pub async fn consultar_incidencia(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConsultaResponse>, ApiError> {
    let client_id = client_id_from_body(&body)?;

    let dataset = state.dataset().await?;

    let record = find_by_client_id(&dataset, &client_id)
        .cloned()
        .ok_or_else(|| {
            AppError::new(
                INCIDENT_NOT_FOUND,
                format!("No se encontró ninguna incidencia con el ID {client_id}"),
            )
        })?;

    let llm = state.llm.clone();
    let model = state.model.clone();
    let respuesta =
        crate::run_blocking(move || narrate_incident(llm.as_ref(), &model, &record)).await?;

    tracing::info!(client_id = %client_id, chars = respuesta.len(), "incident narrated");
    Ok(Json(ConsultaResponse { respuesta }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let llm = state.llm.clone();
    let probe = crate::run_blocking(move || llm.health_check()).await;
    let (model_reachable, message) = match probe {
        Ok(()) => (true, "IncidencIA API is alive".to_string()),
        Err(e) => (false, format!("IncidencIA API is alive; model: {}", e.message)),
    };
    Json(HealthResponse {
        ok: true,
        message,
        model_reachable,
    })
}

/// Extract a non-empty `ID Cliente` from a JSON body.
///
/// Strings are taken verbatim; numbers are compared by their decimal text. Anything else
/// (bad JSON, non-object body, null, empty string) is a validation error.
pub fn client_id_from_body(body: &[u8]) -> Result<String, AppError> {
    let required = || AppError::new(VALIDATION_CLIENT_ID_REQUIRED, "ID Cliente es obligatorio");

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(err = %e, "request body is not valid JSON");
        required()
    })?;

    match value.get(CLIENT_ID_FIELD) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(required()),
    }
}
