use ng_case::{CaseError, from_yaml_str, load_yaml, run_case};
use ng_eos::{EosError, SweepVariable};
use std::path::{Path, PathBuf};

fn cases_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../cases")
}

#[test]
fn bundled_cases_load_and_run() {
    let cases = [
        "pipeline_gas.yaml",
        "methane_ambient.yaml",
        "condensate_pseudo.yaml",
    ];

    for name in cases {
        let path = cases_dir().join(name);
        let case = load_yaml(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        let report = run_case(&case).unwrap_or_else(|e| panic!("Failed to run {}: {}", name, e));
        assert!(report.result.molar_volume_m3_per_mol > 0.0, "{name}");
        assert!(report.result.density_kg_m3 > 0.0, "{name}");
    }
}

#[test]
fn methane_ambient_case_matches_ideal_gas() {
    let case = load_yaml(&cases_dir().join("methane_ambient.yaml")).unwrap();
    let report = run_case(&case).unwrap();

    let ideal = 8.314 * 298.15 / 101_325.0;
    assert!((report.result.molar_volume_m3_per_mol - ideal).abs() / ideal < 0.02);
    assert!((report.result.compressibility_factor - 1.0).abs() < 0.01);
    assert!(report.sweep.is_none());
}

#[test]
fn pipeline_sweep_density_rises_with_pressure() {
    let case = load_yaml(&cases_dir().join("pipeline_gas.yaml")).unwrap();
    let report = run_case(&case).unwrap();

    assert!((report.pressure_pa - 50e5).abs() < 1e-6);
    assert!((report.temperature_k - 288.15).abs() < 1e-9);

    let sweep = report.sweep.unwrap();
    assert_eq!(sweep.variable, SweepVariable::Pressure);
    assert_eq!(sweep.points.len(), 20);
    assert_eq!(sweep.num_failed, 0);
    assert!((sweep.fixed_value - 288.15).abs() < 1e-9);

    let rho: Vec<f64> = sweep
        .points
        .iter()
        .map(|p| p.result.unwrap().density_kg_m3)
        .collect();
    assert!(rho.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn custom_species_are_usable() {
    let case = load_yaml(&cases_dir().join("condensate_pseudo.yaml")).unwrap();
    let report = run_case(&case).unwrap();
    let sweep = report.sweep.unwrap();
    assert_eq!(sweep.points.len(), 11);
    assert_eq!(sweep.num_successful + sweep.num_failed, 11);
    assert!(report.result.compressibility_factor < 1.0);
}

#[test]
fn unknown_species_surfaces_as_engine_error() {
    let yaml = r#"
version: 1
name: Mystery
conditions: { pressure: 1 atm, temperature: 25 C }
composition: { Methane: 0.5, Unobtainium: 0.5 }
"#;
    let case = from_yaml_str(yaml).unwrap();
    let err = run_case(&case).unwrap_err();
    assert!(matches!(
        err,
        CaseError::Eos(EosError::UnknownSpecies { ref species }) if species == "Unobtainium"
    ));
}

#[test]
fn fraction_sum_is_checked_by_the_engine() {
    let yaml = r#"
version: 1
name: Short
conditions: { pressure: 1 atm, temperature: 25 C }
composition: { Methane: 0.9, Ethane: 0.09 }
"#;
    let case = from_yaml_str(yaml).unwrap();
    assert!(matches!(
        run_case(&case),
        Err(CaseError::Eos(EosError::InvalidComposition { .. }))
    ));
}
