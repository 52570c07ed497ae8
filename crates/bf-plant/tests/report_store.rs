use bf_plant::*;

fn analyzed(name: &str) -> (Scenario, PlantReport, String) {
    let scenario = Scenario::new(name);
    let analysis = analyze(&scenario);
    let report = build_report(&scenario, &analysis);
    let report_id = compute_report_id(&scenario, ANALYSIS_VERSION);
    (scenario, report, report_id)
}

#[test]
fn save_and_load_report() {
    let temp_dir = std::env::temp_dir().join("bf_plant_store_test");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = ReportStore::new(temp_dir.clone()).unwrap();
    let (scenario, report, report_id) = analyzed("store-test");

    let manifest = ReportManifest::new(report_id.clone(), &scenario, ANALYSIS_VERSION);
    store.save_report(&manifest, &report).unwrap();

    assert!(store.has_report(&report_id));

    let loaded_manifest = store.load_manifest(&report_id).unwrap();
    assert_eq!(loaded_manifest.scenario_name, "store-test");
    assert_eq!(loaded_manifest.analysis_version, ANALYSIS_VERSION);

    let loaded_report = store.load_report(&report_id).unwrap();
    assert_eq!(loaded_report, report);
}

#[test]
fn list_and_delete_reports() {
    let temp_dir = std::env::temp_dir().join("bf_plant_store_list");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = ReportStore::new(temp_dir.clone()).unwrap();

    let (scenario_a, report_a, id_a) = analyzed("plant-a");
    let mut scenario_b = Scenario::new("plant-b");
    scenario_b.gas_turbine.pressure_ratio = 14.0;
    let report_b = build_report(&scenario_b, &analyze(&scenario_b));
    let id_b = compute_report_id(&scenario_b, ANALYSIS_VERSION);
    assert_ne!(id_a, id_b);

    store
        .save_report(
            &ReportManifest::new(id_a.clone(), &scenario_a, ANALYSIS_VERSION),
            &report_a,
        )
        .unwrap();
    store
        .save_report(
            &ReportManifest::new(id_b.clone(), &scenario_b, ANALYSIS_VERSION),
            &report_b,
        )
        .unwrap();

    assert_eq!(store.list_reports().unwrap().len(), 2);

    store.delete_report(&id_a).unwrap();
    assert!(!store.has_report(&id_a));
    assert_eq!(store.list_reports().unwrap().len(), 1);
}

#[test]
fn missing_report_is_an_error() {
    let temp_dir = std::env::temp_dir().join("bf_plant_store_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = ReportStore::new(temp_dir).unwrap();
    let err = store.load_manifest("does-not-exist").unwrap_err();
    assert!(matches!(err, PlantError::ReportNotFound { .. }));
}
