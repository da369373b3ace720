use crate::domain::IncidentRecord;

/// Render a record as the descriptive fragment embedded in the narration prompt.
///
/// Output is `Label: value` pairs joined by `", "` in `COLUMNS` order, with no trailing
/// separator. The layout is part of the prompt contract; changing it changes model output.
pub fn format_incident_for_model(record: &IncidentRecord) -> String {
    record
        .labelled_fields()
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
