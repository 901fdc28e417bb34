//! Case execution: case file → engine → report.

use crate::schema::{CaseFile, SweepDef};
use crate::units::Quantity;
use crate::CaseResult;
use ng_eos::{
    Composition, DEFAULT_SUM_TOLERANCE, EosEngine, EosKind, PropertyResult, ReferenceTable,
    SolverConfig, SpeciesProperties, StateConditions, SweepDefinition, SweepVariable, execute_sweep,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Plain SI output of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointReport {
    pub molar_volume_m3_per_mol: f64,
    pub compressibility_factor: f64,
    pub density_kg_m3: f64,
}

impl From<&PropertyResult> for PointReport {
    fn from(result: &PropertyResult) -> Self {
        Self {
            molar_volume_m3_per_mol: result.molar_volume_m3_per_mol(),
            compressibility_factor: result.compressibility_factor,
            density_kg_m3: result.density_kg_m3(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPointReport {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<PointReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub variable: SweepVariable,
    pub fixed_value: f64,
    pub num_successful: usize,
    pub num_failed: usize,
    pub points: Vec<SweepPointReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub name: String,
    pub eos: EosKind,
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub result: PointReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepReport>,
}

/// Engine configured with the case's variant, solver settings, table rows and overrides.
pub fn build_engine(case: &CaseFile) -> CaseResult<EosEngine> {
    let table = if case.custom_species.is_empty() {
        ReferenceTable::shared_builtin()
    } else {
        let mut table = ReferenceTable::builtin();
        for custom in &case.custom_species {
            let mut props = SpeciesProperties::new(
                custom.critical_temperature,
                custom.critical_pressure,
                custom.molar_mass,
            );
            props.acentric_factor = custom.acentric_factor;
            table.insert(&custom.name, props)?;
        }
        Arc::new(table)
    };

    let mut solver = SolverConfig::default();
    if let Some(def) = &case.solver {
        if let Some(max_iterations) = def.max_iterations {
            solver.max_iterations = max_iterations;
        }
        if let Some(abs_tol) = def.abs_tol {
            solver.abs_tol = abs_tol;
        }
    }

    let overrides = case
        .overrides
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();

    Ok(EosEngine::new(table)
        .with_eos(case.eos)
        .with_solver_config(solver)
        .with_overrides(overrides))
}

pub fn build_composition(case: &CaseFile) -> CaseResult<Composition> {
    let tolerance = case.composition_tolerance.unwrap_or(DEFAULT_SUM_TOLERANCE);
    let fractions = case.composition.iter().map(|(name, f)| (name.as_str(), *f));
    Ok(Composition::with_tolerance(fractions, tolerance)?)
}

pub fn build_conditions(case: &CaseFile) -> CaseResult<StateConditions> {
    let p = case.conditions.pressure.to_si(Quantity::Pressure)?;
    let t = case.conditions.temperature.to_si(Quantity::Temperature)?;
    Ok(StateConditions::from_si(p, t)?)
}

pub fn build_sweep(def: &SweepDef) -> CaseResult<SweepDefinition> {
    let quantity = match def.variable {
        SweepVariable::Pressure => Quantity::Pressure,
        SweepVariable::Temperature => Quantity::Temperature,
    };
    let start = def.start.to_si(quantity)?;
    let end = def.end.to_si(quantity)?;
    Ok(SweepDefinition::new(def.variable, start, end, def.points, def.spacing)?)
}

/// Evaluate the case conditions and, if present, its sweep.
///
/// A failure at the main conditions is an error. Sweep points fail
/// individually and are recorded in the report.
pub fn run_case(case: &CaseFile) -> CaseResult<CaseReport> {
    crate::validate::validate_case(case)?;

    let engine = build_engine(case)?;
    let composition = build_composition(case)?;
    let conditions = build_conditions(case)?;

    let result = engine.evaluate(&composition, &conditions)?;
    info!(case = %case.name, eos = %case.eos, "{result}");

    let sweep = match &case.sweep {
        Some(def) => {
            let sweep = build_sweep(def)?;
            let fixed_value = match sweep.variable() {
                SweepVariable::Pressure => conditions.temperature_k(),
                SweepVariable::Temperature => conditions.pressure_pa(),
            };
            let outcome = execute_sweep(&engine, &composition, &sweep, fixed_value);
            Some(SweepReport {
                variable: outcome.variable,
                fixed_value: outcome.fixed_value,
                num_successful: outcome.num_successful,
                num_failed: outcome.num_failed,
                points: outcome
                    .points
                    .iter()
                    .map(|p| match &p.outcome {
                        Ok(r) => SweepPointReport {
                            value: p.value,
                            result: Some(r.into()),
                            error: None,
                        },
                        Err(e) => SweepPointReport {
                            value: p.value,
                            result: None,
                            error: Some(e.to_string()),
                        },
                    })
                    .collect(),
            })
        }
        None => None,
    };

    Ok(CaseReport {
        name: case.name.clone(),
        eos: case.eos,
        pressure_pa: conditions.pressure_pa(),
        temperature_k: conditions.temperature_k(),
        result: (&result).into(),
        sweep,
    })
}

/// Fail with `CaseError::Eos` when a case's species cannot all be resolved.
pub fn check_species(case: &CaseFile) -> CaseResult<()> {
    let engine = build_engine(case)?;
    for name in case.composition.keys() {
        engine.lookup_species(name)?;
    }
    Ok(())
}
