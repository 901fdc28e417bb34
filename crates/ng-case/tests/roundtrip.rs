use ng_case::*;
use ng_eos::{EosKind, SpeciesOverride, SweepType, SweepVariable};
use std::collections::BTreeMap;

fn pipeline_case() -> CaseFile {
    CaseFile {
        version: LATEST_VERSION,
        name: "Pipeline gas".to_string(),
        eos: EosKind::PengRobinson,
        conditions: ConditionsDef {
            pressure: QuantityInput::from("50 bar"),
            temperature: QuantityInput::Si(288.15),
        },
        composition: BTreeMap::from([
            ("Methane".to_string(), 0.9),
            ("Ethane".to_string(), 0.07),
            ("Nitrogen".to_string(), 0.03),
        ]),
        overrides: BTreeMap::from([(
            "Ethane".to_string(),
            SpeciesOverride {
                acentric_factor: Some(0.1),
                ..SpeciesOverride::default()
            },
        )]),
        custom_species: vec![],
        composition_tolerance: Some(1e-3),
        solver: Some(SolverDef {
            max_iterations: Some(50),
            abs_tol: None,
        }),
        sweep: Some(SweepDef {
            variable: SweepVariable::Pressure,
            start: QuantityInput::from("1 bar"),
            end: QuantityInput::from("100 bar"),
            points: 10,
            spacing: SweepType::Logarithmic,
        }),
    }
}

#[test]
fn roundtrip_yaml_pipeline_case() {
    let case = pipeline_case();
    validate_case(&case).unwrap();

    let path = std::env::temp_dir().join("ng_case_roundtrip_pipeline.yaml");
    save_yaml(&path, &case).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn roundtrip_json_pipeline_case() {
    let case = pipeline_case();

    let path = std::env::temp_dir().join("ng_case_roundtrip_pipeline.json");
    save_json(&path, &case).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(case, loaded);
}

#[test]
fn save_rejects_invalid_case() {
    let mut case = pipeline_case();
    case.composition.clear();
    let path = std::env::temp_dir().join("ng_case_invalid.yaml");
    assert!(matches!(save_yaml(&path, &case), Err(CaseError::Validation(_))));
}

#[test]
fn minimal_yaml_uses_defaults() {
    let yaml = r#"
version: 1
name: Air
conditions:
  pressure: 1 atm
  temperature: 300
composition:
  Nitrogen: 0.79
  Oxygen: 0.21
"#;
    let case = from_yaml_str(yaml).unwrap();
    assert_eq!(case.eos, EosKind::VanDerWaals);
    assert!(case.overrides.is_empty());
    assert!(case.sweep.is_none());
    assert_eq!(case.conditions.temperature, QuantityInput::Si(300.0));
}

#[test]
fn future_version_is_refused() {
    let yaml = r#"
version: 7
name: From the future
conditions: { pressure: 1e5, temperature: 300 }
composition: { Methane: 1.0 }
"#;
    assert!(matches!(
        from_yaml_str(yaml),
        Err(CaseError::Version { found: 7, .. })
    ));
}

#[test]
fn unknown_eos_name_is_a_parse_error() {
    let yaml = r#"
version: 1
name: Bad
eos: BenedictWebbRubin
conditions: { pressure: 1e5, temperature: 300 }
composition: { Methane: 1.0 }
"#;
    assert!(matches!(from_yaml_str(yaml), Err(CaseError::Yaml(_))));
}
