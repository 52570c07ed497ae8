use bf_plant::*;

#[test]
fn yaml_roundtrip_preserves_scenario() {
    let temp_dir = std::env::temp_dir().join("bf_plant_roundtrip");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();

    let path = temp_dir.join("scenario.yaml");
    let scenario = Scenario::new("roundtrip");
    save_yaml(&path, &scenario).unwrap();

    let loaded = load_yaml(&path).unwrap();
    assert_eq!(loaded, scenario);
}

#[test]
fn partial_yaml_fills_defaults() {
    let content = "version: 1\nname: sparse\ngas_turbine:\n  ambient_temperature_c: 30.0\n  pressure_ratio: 12.0\n  turbine_inlet_temperature_c: 1100.0\n  compressor_efficiency: 0.8\n  turbine_efficiency: 0.88\n";
    let scenario: Scenario = serde_yaml::from_str(content).unwrap();

    // Omitted sections take the reference operating point
    assert_eq!(scenario.tank_a, HtcFeedDef::default());
    assert_eq!(scenario.tank_b, AdFeedDef::default());
    assert_eq!(scenario.htc_steam.reactor_pressure_bar, 20.0);
    assert_eq!(scenario.gas_turbine.pressure_ratio, 12.0);

    validate_scenario(&scenario).unwrap();
}

#[test]
fn save_rejects_invalid_scenario() {
    let temp_dir = std::env::temp_dir().join("bf_plant_invalid");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();

    let mut scenario = Scenario::new("bad");
    scenario.gas_turbine.pressure_ratio = 0.5;

    let path = temp_dir.join("scenario.yaml");
    let err = save_yaml(&path, &scenario).unwrap_err();
    assert!(matches!(err, PlantError::Validation(_)));
    assert!(!path.exists());
}
