//! Case file schema definitions.

use crate::units::QuantityInput;
use ng_eos::{EosKind, SpeciesOverride, SweepType, SweepVariable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One evaluation request, optionally with a sweep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub eos: EosKind,
    pub conditions: ConditionsDef,
    /// Species name → mole fraction
    pub composition: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, SpeciesOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_species: Vec<CustomSpeciesDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionsDef {
    pub pressure: QuantityInput,
    pub temperature: QuantityInput,
}

/// Extra reference-table row, SI units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomSpeciesDef {
    pub name: String,
    pub critical_temperature: f64,
    pub critical_pressure: f64,
    pub molar_mass: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acentric_factor: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abs_tol: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub variable: SweepVariable,
    pub start: QuantityInput,
    pub end: QuantityInput,
    pub points: usize,
    #[serde(default)]
    pub spacing: SweepType,
}
