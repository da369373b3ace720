use serde::{Deserialize, Serialize};
use std::fmt;

pub const VALIDATION_CLIENT_ID_REQUIRED: &str = "VALIDATION_CLIENT_ID_REQUIRED";
pub const DATASET_READ_FAILED: &str = "DATASET_READ_FAILED";
pub const DATASET_HEADERS_FAILED: &str = "DATASET_HEADERS_FAILED";
pub const DATASET_PARSE_FAILED: &str = "DATASET_PARSE_FAILED";
pub const INCIDENT_NOT_FOUND: &str = "INCIDENT_NOT_FOUND";
pub const INTERNAL_UNEXPECTED: &str = "INTERNAL_UNEXPECTED";

/// Single structured error shape used across backend layers and exposed over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

/// Coarse failure classes a transport maps onto its own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    DatasetUnavailable,
    NotFound,
    Upstream,
    Unexpected,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn unexpected(details: impl Into<String>) -> Self {
        Self::new(INTERNAL_UNEXPECTED, "Error interno inesperado").with_details(details)
    }

    /// Classification is derived from the code prefix so every layer only has to pick a code.
    pub fn class(&self) -> ErrorClass {
        let code = self.code.as_str();
        if code.starts_with("VALIDATION_") {
            ErrorClass::Validation
        } else if code.starts_with("DATASET_") {
            ErrorClass::DatasetUnavailable
        } else if code == INCIDENT_NOT_FOUND {
            ErrorClass::NotFound
        } else if code.starts_with("AI_") {
            ErrorClass::Upstream
        } else {
            ErrorClass::Unexpected
        }
    }

    /// Human-readable text for API clients: the message, followed by details when present.
    pub fn public_message(&self) -> String {
        match &self.details {
            Some(d) if !d.is_empty() => format!("{}: {}", self.message, d),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
