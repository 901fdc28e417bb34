//! Per-species critical constants and caller-supplied overrides.

use crate::error::{EosError, EosResult};
use ng_core::{ensure_finite, ensure_positive};
use serde::{Deserialize, Serialize};

/// Critical-point data for one component.
///
/// Plain SI `f64` fields, so rows can be written directly in case files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProperties {
    /// Critical temperature [K]
    pub critical_temperature: f64,
    /// Critical pressure [Pa]
    pub critical_pressure: f64,
    /// Molar mass [kg/mol]
    pub molar_mass: f64,
    /// Acentric factor (dimensionless), required by Soave and Peng-Robinson
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acentric_factor: Option<f64>,
}

impl SpeciesProperties {
    pub fn new(critical_temperature: f64, critical_pressure: f64, molar_mass: f64) -> Self {
        Self {
            critical_temperature,
            critical_pressure,
            molar_mass,
            acentric_factor: None,
        }
    }

    pub fn with_acentric_factor(mut self, omega: f64) -> Self {
        self.acentric_factor = Some(omega);
        self
    }

    /// Check positivity and finiteness; `species` names the row in errors.
    pub fn validate(&self, species: &str) -> EosResult<()> {
        let positive = |v: f64, what: &'static str| {
            ensure_positive(v, what).map(|_| ()).map_err(|_| missing(species, what))
        };
        positive(self.critical_temperature, "positive critical temperature")?;
        positive(self.critical_pressure, "positive critical pressure")?;
        positive(self.molar_mass, "positive molar mass")?;
        if let Some(omega) = self.acentric_factor {
            ensure_finite(omega, "acentric factor").map_err(|_| missing(species, "finite acentric factor"))?;
        }
        Ok(())
    }

    /// Acentric factor, or `MissingComponentData` when the row has none.
    pub fn require_acentric_factor(&self, species: &str) -> EosResult<f64> {
        self.acentric_factor
            .ok_or_else(|| missing(species, "acentric factor"))
    }
}

/// Caller-entered critical data that replaces table values field by field.
///
/// For a species absent from the table the override stands alone and must
/// carry critical temperature, critical pressure and molar mass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molar_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acentric_factor: Option<f64>,
}

impl From<SpeciesProperties> for SpeciesOverride {
    fn from(props: SpeciesProperties) -> Self {
        Self {
            critical_temperature: Some(props.critical_temperature),
            critical_pressure: Some(props.critical_pressure),
            molar_mass: Some(props.molar_mass),
            acentric_factor: props.acentric_factor,
        }
    }
}

impl SpeciesOverride {
    /// Patch `base` (the table row, if any) with the fields present here.
    pub fn apply(&self, species: &str, base: Option<&SpeciesProperties>) -> EosResult<SpeciesProperties> {
        let props = match base {
            Some(base) => SpeciesProperties {
                critical_temperature: self.critical_temperature.unwrap_or(base.critical_temperature),
                critical_pressure: self.critical_pressure.unwrap_or(base.critical_pressure),
                molar_mass: self.molar_mass.unwrap_or(base.molar_mass),
                acentric_factor: self.acentric_factor.or(base.acentric_factor),
            },
            None => SpeciesProperties {
                critical_temperature: self
                    .critical_temperature
                    .ok_or_else(|| missing(species, "critical temperature"))?,
                critical_pressure: self
                    .critical_pressure
                    .ok_or_else(|| missing(species, "critical pressure"))?,
                molar_mass: self
                    .molar_mass
                    .ok_or_else(|| missing(species, "molar mass"))?,
                acentric_factor: self.acentric_factor,
            },
        };
        props.validate(species)?;
        Ok(props)
    }
}

fn missing(species: &str, what: &'static str) -> EosError {
    EosError::MissingComponentData {
        species: species.to_string(),
        what,
    }
}
