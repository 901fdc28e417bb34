//! Sweep execution over a fixed composition.
//!
//! Points are independent evaluations against a read-only engine, so they are
//! computed in parallel with rayon. Each point keeps its own outcome; a failed
//! point is reported, never filled in.

use crate::composition::Composition;
use crate::engine::{EosEngine, PropertyResult};
use crate::error::{EosError, EosResult};
use crate::state::StateConditions;
use crate::sweeps::{SweepDefinition, SweepVariable};
use rayon::prelude::*;
use tracing::debug;

/// One evaluated sweep point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    /// Value of the swept variable (Pa or K)
    pub value: f64,
    pub outcome: EosResult<PropertyResult>,
}

/// Result of a property sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub variable: SweepVariable,
    /// Value of the variable held fixed (Pa or K)
    pub fixed_value: f64,
    pub points: Vec<SweepPoint>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepResult {
    /// Independent values for which the evaluation succeeded.
    pub fn successful_independent_values(&self) -> Vec<f64> {
        self.successes().map(|(v, _)| v).collect()
    }

    /// Molar volume array (excluding failed points)
    pub fn molar_volume_m3_per_mol(&self) -> Vec<f64> {
        self.successes().map(|(_, r)| r.molar_volume_m3_per_mol()).collect()
    }

    /// Compressibility factor array (excluding failed points)
    pub fn compressibility_factor(&self) -> Vec<f64> {
        self.successes().map(|(_, r)| r.compressibility_factor).collect()
    }

    /// Density array (excluding failed points)
    pub fn density_kg_m3(&self) -> Vec<f64> {
        self.successes().map(|(_, r)| r.density_kg_m3()).collect()
    }

    fn successes(&self) -> impl Iterator<Item = (f64, &PropertyResult)> + '_ {
        self.points
            .iter()
            .filter_map(|p| p.outcome.as_ref().ok().map(|r| (p.value, r)))
    }
}

/// Run `sweep` for `composition`, holding the other state variable at `fixed_value`.
///
/// `fixed_value` is a temperature in K for a pressure sweep and a pressure in
/// Pa for a temperature sweep. An invalid fixed value fails every point with
/// the same `InvalidConditions` error.
pub fn execute_sweep(
    engine: &EosEngine,
    composition: &Composition,
    sweep: &SweepDefinition,
    fixed_value: f64,
) -> SweepResult {
    let values = sweep.generate_points();

    let points: Vec<SweepPoint> = values
        .par_iter()
        .map(|&value| {
            let conditions = match sweep.variable() {
                SweepVariable::Pressure => StateConditions::from_si(value, fixed_value),
                SweepVariable::Temperature => StateConditions::from_si(fixed_value, value),
            };
            let outcome = conditions.and_then(|c| engine.evaluate(composition, &c));
            SweepPoint { value, outcome }
        })
        .collect();

    let num_successful = points.iter().filter(|p| p.outcome.is_ok()).count();
    let num_failed = points.len() - num_successful;
    debug!(%sweep, num_successful, num_failed, "sweep finished");

    SweepResult {
        variable: sweep.variable(),
        fixed_value,
        points,
        num_successful,
        num_failed,
    }
}

/// Pressure sweep at fixed temperature.
pub fn execute_pressure_sweep_at_temperature(
    engine: &EosEngine,
    composition: &Composition,
    sweep: &SweepDefinition,
    fixed_temperature_k: f64,
) -> EosResult<SweepResult> {
    expect_variable(sweep, SweepVariable::Pressure)?;
    Ok(execute_sweep(engine, composition, sweep, fixed_temperature_k))
}

/// Temperature sweep at fixed pressure.
pub fn execute_temperature_sweep_at_pressure(
    engine: &EosEngine,
    composition: &Composition,
    sweep: &SweepDefinition,
    fixed_pressure_pa: f64,
) -> EosResult<SweepResult> {
    expect_variable(sweep, SweepVariable::Temperature)?;
    Ok(execute_sweep(engine, composition, sweep, fixed_pressure_pa))
}

fn expect_variable(sweep: &SweepDefinition, expected: SweepVariable) -> EosResult<()> {
    if sweep.variable() == expected {
        Ok(())
    } else {
        Err(EosError::InvalidSweep {
            reason: format!("expected a {expected} sweep, got a {} sweep", sweep.variable()),
        })
    }
}
