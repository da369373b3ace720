use std::io::Write;

use incidencia_core::error::{DATASET_HEADERS_FAILED, DATASET_PARSE_FAILED, DATASET_READ_FAILED};
use incidencia_core::ingest::incident_csv::{load_incident_csv, parse_incident_csv};
use pretty_assertions::assert_eq;

const HEADER: &str = "ID Cliente;Nombre Cliente;Estado Incidencia;Resultado Prueba;Tipo Sistema;Nivel Severidad;Tipo Impacto;Prioridad;Equipo Afectado;Ubicación;Fecha Reporte;Fecha Resolución;Descripción";

#[test]
fn loads_demo_fixture_in_file_order() {
    let csv_text = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../fixtures/demo/datos.csv"
    ));

    let ds = parse_incident_csv(csv_text).expect("parse");
    assert_eq!(ds.len(), 5);
    let ids = ds
        .records()
        .iter()
        .map(|r| r.client_id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec!["CUST00001", "CUST00002", "CUST00003", "CUST00004", "CUST00005"]
    );

    let cristian = &ds.records()[3];
    assert_eq!(cristian.client_name, "Cristian Tello");
    assert_eq!(cristian.location, "Sucursal Este");
    assert_eq!(cristian.impact_type, "Fallo total, degradación de servicio");
    assert_eq!(cristian.resolution_date, "");
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let ds = parse_incident_csv(&format!("{HEADER}\n")).expect("parse");
    assert!(ds.is_empty());
}

#[test]
fn column_order_and_extra_columns_do_not_matter() {
    let csv_text = "Descripción;Extra;ID Cliente;Nombre Cliente;Estado Incidencia;Resultado Prueba;Tipo Sistema;Nivel Severidad;Tipo Impacto;Prioridad;Equipo Afectado;Ubicación;Fecha Reporte;Fecha Resolución\n\
Sin línea;x;CUST9;Pablo;Abierta;KO;ADSL;Alto;Total;Alta;Router;Centro;2024-02-01;\n";
    let ds = parse_incident_csv(csv_text).expect("parse");
    let r = &ds.records()[0];
    assert_eq!(r.client_id, "CUST9");
    assert_eq!(r.description, "Sin línea");
    assert_eq!(r.report_date, "2024-02-01");
}

#[test]
fn comma_delimited_file_is_rejected_as_missing_columns() {
    let err = parse_incident_csv(&HEADER.replace(';', ",")).expect_err("should fail");
    assert_eq!(err.code, DATASET_HEADERS_FAILED);
    assert_eq!(err.message, "No se pudo cargar el archivo CSV");
}

#[test]
fn ragged_row_is_a_parse_failure_with_line_number() {
    let csv_text = format!("{HEADER}\nCUST1;Ana;Abierta\n");
    let err = parse_incident_csv(&csv_text).expect_err("should fail");
    assert_eq!(err.code, DATASET_PARSE_FAILED);
    assert!(err.details.unwrap_or_default().contains("line=2"));
}

#[test]
fn missing_file_is_a_read_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("datos.csv");
    let err = load_incident_csv(&path).expect_err("should fail");
    assert_eq!(err.code, DATASET_READ_FAILED);
    let details = err.details.unwrap_or_default();
    assert!(!details.is_empty());
    assert!(!details.contains(&*dir.path().to_string_lossy()));
}

#[test]
fn non_utf8_file_is_a_read_failure() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(HEADER.as_bytes()).expect("write");
    // Latin-1 encoded "Ubicación" style byte.
    file.write_all(b"\nCUST1;Ana;Abierta;KO;ADSL;Alto;Total;Alta;Router;Ubicaci\xf3n;2024;;x\n")
        .expect("write");
    let err = load_incident_csv(file.path()).expect_err("should fail");
    assert_eq!(err.code, DATASET_READ_FAILED);
}
