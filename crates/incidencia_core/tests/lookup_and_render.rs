use incidencia_core::domain::{Dataset, IncidentRecord};
use incidencia_core::ingest::incident_csv::parse_incident_csv;
use incidencia_core::lookup::find_by_client_id;
use incidencia_core::render::format_incident_for_model;
use pretty_assertions::assert_eq;

fn record(client_id: &str, client_name: &str) -> IncidentRecord {
    IncidentRecord {
        client_id: client_id.to_string(),
        client_name: client_name.to_string(),
        incident_status: "Abierta".to_string(),
        test_result: "Fallido".to_string(),
        system_type: "Fibra óptica".to_string(),
        severity_level: "Bajo".to_string(),
        impact_type: "Fallo total".to_string(),
        priority: "Alta".to_string(),
        affected_equipment: "ONT".to_string(),
        location: "Sucursal Este".to_string(),
        report_date: "2024-01-09".to_string(),
        resolution_date: String::new(),
        description: "Caída completa".to_string(),
    }
}

#[test]
fn duplicate_ids_resolve_to_first_row_every_time() {
    let ds = Dataset::new(vec![
        record("CUST1", "Primero"),
        record("CUST2", "Otro"),
        record("CUST1", "Segundo"),
    ]);
    for _ in 0..3 {
        let found = find_by_client_id(&ds, "CUST1").expect("found");
        assert_eq!(found.client_name, "Primero");
    }
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    let ds = Dataset::new(vec![record("CUST00004", "Cristian Tello")]);
    assert!(find_by_client_id(&ds, "cust00004").is_none());
    assert!(find_by_client_id(&ds, " CUST00004").is_none());
    assert!(find_by_client_id(&ds, "CUST0000").is_none());
    assert!(find_by_client_id(&ds, "CUST00004").is_some());
}

#[test]
fn empty_dataset_finds_nothing() {
    assert!(find_by_client_id(&Dataset::default(), "CUST00004").is_none());
}

#[test]
fn formatter_emits_fixed_labels_in_fixed_order() {
    let out = format_incident_for_model(&record("CUST00004", "Cristian Tello"));
    assert_eq!(
        out,
        "ID Cliente: CUST00004, Nombre Cliente: Cristian Tello, Estado Incidencia: Abierta, \
Resultado Prueba: Fallido, Tipo Sistema: Fibra óptica, Nivel Severidad: Bajo, \
Tipo Impacto: Fallo total, Prioridad: Alta, Equipo Afectado: ONT, \
Ubicación: Sucursal Este, Fecha Reporte: 2024-01-09, Fecha Resolución: , \
Descripción: Caída completa"
    );
}

#[test]
fn formatter_order_is_independent_of_file_column_order() {
    let reversed = "Descripción;Fecha Resolución;Fecha Reporte;Ubicación;Equipo Afectado;Prioridad;Tipo Impacto;Nivel Severidad;Tipo Sistema;Resultado Prueba;Estado Incidencia;Nombre Cliente;ID Cliente\n\
Caída completa;;2024-01-09;Sucursal Este;ONT;Alta;Fallo total;Bajo;Fibra óptica;Fallido;Abierta;Cristian Tello;CUST00004\n";
    let ds = parse_incident_csv(reversed).expect("parse");
    let found = find_by_client_id(&ds, "CUST00004").expect("found");
    assert_eq!(
        format_incident_for_model(found),
        format_incident_for_model(&record("CUST00004", "Cristian Tello"))
    );
}
