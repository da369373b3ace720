pub mod incident_csv;
