use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::domain::Dataset;
use crate::error::AppError;
use crate::ingest::incident_csv::load_incident_csv;

/// Owns the incident dataset for the life of the process.
///
/// The file is read on first use and never again: a successful load is shared by every caller,
/// and a failed load is kept as a standing error (no re-read until restart). Concurrent first
/// callers block on the same initialisation, so the file is read exactly once.
#[derive(Debug)]
pub struct IncidentRepository {
    path: PathBuf,
    dataset: OnceLock<Result<Arc<Dataset>, AppError>>,
}

impl IncidentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dataset: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a load has been attempted (successfully or not).
    pub fn is_initialised(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// The dataset, loading it on first call. Blocking; call off the async executor.
    pub fn dataset(&self) -> Result<Arc<Dataset>, AppError> {
        self.dataset
            .get_or_init(|| load_incident_csv(&self.path).map(Arc::new))
            .clone()
    }
}
