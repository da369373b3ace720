use std::path::Path;

use crate::domain::{Dataset, IncidentRecord, COLUMNS};
use crate::error::{AppError, DATASET_HEADERS_FAILED, DATASET_PARSE_FAILED, DATASET_READ_FAILED};

/// Field separator used by the incident exporter.
pub const DELIMITER: u8 = b';';

const LOAD_FAILED_MESSAGE: &str = "No se pudo cargar el archivo CSV";

/// Read and parse the incident export at `path`.
///
/// Every failure mode (missing file, non UTF-8 content, bad headers, ragged rows) comes back as a
/// `DATASET_*` error; nothing here panics. Details never include the path, since they reach API
/// clients; callers log it.
pub fn load_incident_csv(path: &Path) -> Result<Dataset, AppError> {
    let bytes = std::fs::read(path).map_err(|e| {
        AppError::new(DATASET_READ_FAILED, LOAD_FAILED_MESSAGE)
            .with_details(e.to_string())
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        AppError::new(DATASET_READ_FAILED, LOAD_FAILED_MESSAGE)
            .with_details(format!("invalid UTF-8: {e}"))
    })?;
    parse_incident_csv(&text)
}

/// Parse semicolon-delimited incident rows, preserving file order.
///
/// Extra columns are ignored and column order is free; all 13 known headers must be present.
pub fn parse_incident_csv(csv_text: &str) -> Result<Dataset, AppError> {
    let csv_text = csv_text.strip_prefix('\u{feff}').unwrap_or(csv_text);

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(csv_text.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| {
            AppError::new(DATASET_HEADERS_FAILED, LOAD_FAILED_MESSAGE)
                .with_details(format!("failed to read headers: {e}"))
        })?
        .clone();

    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(AppError::new(DATASET_HEADERS_FAILED, LOAD_FAILED_MESSAGE)
            .with_details(format!("missing columns: {}", missing.join(", "))));
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<IncidentRecord>().enumerate() {
        let record = result.map_err(|e| {
            // Header is line 1; data rows are 1-based after it.
            let line = e
                .position()
                .map(|p| p.line())
                .unwrap_or(idx as u64 + 2);
            AppError::new(DATASET_PARSE_FAILED, LOAD_FAILED_MESSAGE)
                .with_details(format!("line={line}; err={e}"))
        })?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}

fn missing_columns(headers: &csv::StringRecord) -> Vec<&'static str> {
    COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect()
}
