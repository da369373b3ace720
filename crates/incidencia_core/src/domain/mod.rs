use serde::{Deserialize, Serialize};

/// Column headers of the incident export, in canonical order.
///
/// The same strings label each field when a record is rendered for the model, so the order here
/// is also the order of the rendered fragment.
pub const COLUMNS: [&str; 13] = [
    "ID Cliente",
    "Nombre Cliente",
    "Estado Incidencia",
    "Resultado Prueba",
    "Tipo Sistema",
    "Nivel Severidad",
    "Tipo Impacto",
    "Prioridad",
    "Equipo Afectado",
    "Ubicación",
    "Fecha Reporte",
    "Fecha Resolución",
    "Descripción",
];

/// One row of the connectivity-incident export.
///
/// Notes:
/// - Every value is kept exactly as exported (dates are not parsed, labels are opaque).
/// - An empty `resolution_date` means the incident is still unresolved.
/// - `client_id` is not unique in practice; lookups take the first row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentRecord {
    #[serde(rename = "ID Cliente")]
    pub client_id: String,
    #[serde(rename = "Nombre Cliente")]
    pub client_name: String,
    #[serde(rename = "Estado Incidencia")]
    pub incident_status: String,
    #[serde(rename = "Resultado Prueba")]
    pub test_result: String,
    #[serde(rename = "Tipo Sistema")]
    pub system_type: String,
    #[serde(rename = "Nivel Severidad")]
    pub severity_level: String,
    #[serde(rename = "Tipo Impacto")]
    pub impact_type: String,
    #[serde(rename = "Prioridad")]
    pub priority: String,
    #[serde(rename = "Equipo Afectado")]
    pub affected_equipment: String,
    #[serde(rename = "Ubicación")]
    pub location: String,
    #[serde(rename = "Fecha Reporte")]
    pub report_date: String,
    #[serde(rename = "Fecha Resolución")]
    pub resolution_date: String,
    #[serde(rename = "Descripción")]
    pub description: String,
}

impl IncidentRecord {
    /// Field values paired with their column labels, in `COLUMNS` order.
    pub fn labelled_fields(&self) -> [(&'static str, &str); 13] {
        [
            (COLUMNS[0], self.client_id.as_str()),
            (COLUMNS[1], self.client_name.as_str()),
            (COLUMNS[2], self.incident_status.as_str()),
            (COLUMNS[3], self.test_result.as_str()),
            (COLUMNS[4], self.system_type.as_str()),
            (COLUMNS[5], self.severity_level.as_str()),
            (COLUMNS[6], self.impact_type.as_str()),
            (COLUMNS[7], self.priority.as_str()),
            (COLUMNS[8], self.affected_equipment.as_str()),
            (COLUMNS[9], self.location.as_str()),
            (COLUMNS[10], self.report_date.as_str()),
            (COLUMNS[11], self.resolution_date.as_str()),
            (COLUMNS[12], self.description.as_str()),
        ]
    }
}

/// Immutable, ordered set of incident rows as read from the export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<IncidentRecord>,
}

impl Dataset {
    pub fn new(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
