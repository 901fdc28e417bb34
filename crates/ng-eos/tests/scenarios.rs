//! End-to-end evaluation scenarios.
//!
//! Tolerances are loose where cubic EOS predictions differ from measured data,
//! tight where the result follows from the equations alone.

use ng_eos::{
    Composition, EosEngine, EosError, EosKind, ReferenceTable, SpeciesProperties, StateConditions,
    SweepDefinition, SweepType, SweepVariable, evaluate, execute_sweep,
};
use std::sync::Arc;
use std::thread;

const R: f64 = 8.314;

#[test]
fn methane_at_one_atmosphere() {
    let comp = Composition::pure("Methane").unwrap();
    let cond = StateConditions::from_si(101_325.0, 298.15).unwrap();

    let result = evaluate(&comp, &cond).unwrap();

    let ideal = R * 298.15 / 101_325.0; // ≈ 0.02446 m³/mol
    let vm = result.molar_volume_m3_per_mol();
    assert!((vm - ideal).abs() / ideal < 0.02, "Vm = {vm}");
    assert!((result.compressibility_factor - 1.0).abs() < 0.02);
}

#[test]
fn every_variant_reduces_to_ideal_gas_at_low_pressure() {
    let comp = Composition::new([("Methane", 0.9), ("Ethane", 0.07), ("Nitrogen", 0.03)]).unwrap();
    let cond = StateConditions::from_si(1_000.0, 300.0).unwrap();

    for kind in EosKind::ALL {
        let result = EosEngine::builtin().with_eos(kind).evaluate(&comp, &cond).unwrap();
        assert!(
            (result.compressibility_factor - 1.0).abs() < 1e-3,
            "{kind}: Z = {}",
            result.compressibility_factor
        );
    }
}

#[test]
fn custom_table_with_legacy_methane() {
    let table = ReferenceTable::default()
        .with_entries([("Methane", SpeciesProperties::new(190.6, 4.599e6, 0.016))])
        .unwrap();
    let engine = EosEngine::new(Arc::new(table));

    let comp = Composition::pure("Methane").unwrap();
    let cond = StateConditions::from_si(101_325.0, 298.15).unwrap();
    let result = engine.evaluate(&comp, &cond).unwrap();

    // ρ = M / Vm with M = 0.016
    let expected = 0.016 / result.molar_volume_m3_per_mol();
    assert!((result.density_kg_m3() - expected).abs() < 1e-12);

    let err = engine
        .evaluate(&Composition::pure("Ethane").unwrap(), &cond)
        .unwrap_err();
    assert!(matches!(err, EosError::UnknownSpecies { .. }));
}

#[test]
fn pipeline_gas_is_compressed_at_high_pressure() {
    let comp = Composition::new([
        ("Methane", 0.90),
        ("Ethane", 0.05),
        ("Propane", 0.02),
        ("CO2", 0.01),
        ("Nitrogen", 0.02),
    ])
    .unwrap();
    let cond = StateConditions::from_si(70.0e5, 288.15).unwrap();

    for kind in [EosKind::PengRobinson, EosKind::SoaveRedlichKwong] {
        let result = EosEngine::builtin().with_eos(kind).evaluate(&comp, &cond).unwrap();
        let z = result.compressibility_factor;
        // Typical pipeline gas at 70 bar, 15 °C: Z ≈ 0.85-0.9
        assert!(z > 0.78 && z < 0.95, "{kind}: Z = {z}");
    }
}

#[test]
fn density_rises_with_pressure_along_sweep() {
    let comp = Composition::new([("Methane", 0.95), ("Ethane", 0.05)]).unwrap();
    let sweep = SweepDefinition::new(SweepVariable::Pressure, 1e5, 1e7, 12, SweepType::Logarithmic).unwrap();

    for kind in EosKind::ALL {
        let engine = EosEngine::builtin().with_eos(kind);
        let result = execute_sweep(&engine, &comp, &sweep, 300.0);
        assert_eq!(result.num_failed, 0, "{kind}");
        let rho = result.density_kg_m3();
        assert!(rho.windows(2).all(|w| w[1] > w[0]), "{kind}: {rho:?}");
    }
}

#[test]
fn rejected_inputs_never_reach_the_solver() {
    assert!(matches!(
        StateConditions::from_si(0.0, 300.0),
        Err(EosError::InvalidConditions { .. })
    ));
    assert!(matches!(
        StateConditions::from_si(-101_325.0, 300.0),
        Err(EosError::InvalidConditions { .. })
    ));
    assert!(matches!(
        Composition::new([("Methane", 0.999)]),
        Err(EosError::InvalidComposition { .. })
    ));
    assert!(Composition::new([("Methane", 0.6005), ("Ethane", 0.4)]).is_ok());
}

#[test]
fn shared_engine_gives_identical_results_across_threads() {
    let engine = Arc::new(EosEngine::builtin().with_eos(EosKind::PengRobinson));
    let comp = Arc::new(Composition::new([("Methane", 0.85), ("Ethane", 0.1), ("Propane", 0.05)]).unwrap());
    let cond = StateConditions::from_si(30.0e5, 280.0).unwrap();

    let reference = engine.evaluate(&comp, &cond).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let comp = Arc::clone(&comp);
            thread::spawn(move || engine.evaluate(&comp, &cond).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), reference);
    }
}
