use crate::domain::{Dataset, IncidentRecord};

/// First record whose `client_id` equals `client_id` exactly (case-sensitive).
///
/// Later duplicates are ignored. `None` is an ordinary outcome, not a fault.
pub fn find_by_client_id<'a>(dataset: &'a Dataset, client_id: &str) -> Option<&'a IncidentRecord> {
    dataset.records().iter().find(|r| r.client_id == client_id)
}
