//! Case validation logic.
//!
//! Structural checks run before any engine call. The fraction sum and species
//! lookups are left to the engine, which reports them with its own errors.

use crate::migrate::LATEST_VERSION;
use crate::schema::{CaseFile, CustomSpeciesDef, SweepDef};
use crate::units::{Quantity, QuantityInput};
use ng_eos::{SpeciesOverride, canonical_key};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing value: {field}")]
    Missing { field: String },

    #[error("Duplicate entry: {id} in {field}")]
    Duplicate { id: String, field: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

impl ValidationError {
    /// Path of the offending field, e.g. `conditions.pressure`.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::Duplicate { field, .. } | Self::InvalidValue { field, .. } => {
                field
            }
            Self::UnsupportedVersion { .. } => "version",
        }
    }
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_case(case: &CaseFile) -> Result<(), ValidationError> {
    if case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "name".to_string(),
        });
    }

    check_quantity("conditions.pressure", &case.conditions.pressure, Quantity::Pressure)?;
    check_quantity("conditions.temperature", &case.conditions.temperature, Quantity::Temperature)?;

    validate_composition(case)?;

    let mut custom_names = HashSet::new();
    for (idx, custom) in case.custom_species.iter().enumerate() {
        validate_custom_species(idx, custom)?;
        if !custom_names.insert(canonical_key(&custom.name)) {
            return Err(ValidationError::Duplicate {
                id: custom.name.clone(),
                field: "custom_species".to_string(),
            });
        }
    }

    for (name, value) in &case.overrides {
        validate_override(name, value)?;
    }

    if let Some(tol) = case.composition_tolerance
        && (!tol.is_finite() || tol < 0.0)
    {
        return Err(invalid("composition_tolerance", tol, "must be finite and non-negative"));
    }

    if let Some(solver) = &case.solver {
        if solver.max_iterations == Some(0) {
            return Err(invalid("solver.max_iterations", 0, "must be at least 1"));
        }
        if let Some(tol) = solver.abs_tol
            && (!tol.is_finite() || tol <= 0.0)
        {
            return Err(invalid("solver.abs_tol", tol, "must be positive"));
        }
    }

    if let Some(sweep) = &case.sweep {
        validate_sweep(sweep)?;
    }

    Ok(())
}

fn check_quantity(field: &str, input: &QuantityInput, quantity: Quantity) -> Result<f64, ValidationError> {
    input
        .to_si(quantity)
        .map_err(|e| invalid(field, input, e.to_string()))
}

fn validate_composition(case: &CaseFile) -> Result<(), ValidationError> {
    if case.composition.is_empty() {
        return Err(ValidationError::Missing {
            field: "composition".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (name, fraction) in &case.composition {
        let field = format!("composition.{name}");
        if name.trim().is_empty() {
            return Err(invalid("composition", name, "species name is empty"));
        }
        if !fraction.is_finite() || !(0.0..=1.0).contains(fraction) {
            return Err(invalid(field, fraction, "mole fraction must be between 0 and 1"));
        }
        if !seen.insert(canonical_key(name)) {
            return Err(ValidationError::Duplicate {
                id: name.clone(),
                field: "composition".to_string(),
            });
        }
    }
    Ok(())
}

fn positive(field: String, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn validate_custom_species(idx: usize, custom: &CustomSpeciesDef) -> Result<(), ValidationError> {
    let prefix = format!("custom_species[{idx}]");
    if custom.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: format!("{prefix}.name"),
        });
    }
    positive(format!("{prefix}.critical_temperature"), custom.critical_temperature)?;
    positive(format!("{prefix}.critical_pressure"), custom.critical_pressure)?;
    positive(format!("{prefix}.molar_mass"), custom.molar_mass)?;
    if let Some(omega) = custom.acentric_factor
        && !omega.is_finite()
    {
        return Err(invalid(format!("{prefix}.acentric_factor"), omega, "must be finite"));
    }
    Ok(())
}

fn validate_override(name: &str, value: &SpeciesOverride) -> Result<(), ValidationError> {
    let prefix = format!("overrides.{name}");
    let fields = [
        ("critical_temperature", value.critical_temperature),
        ("critical_pressure", value.critical_pressure),
        ("molar_mass", value.molar_mass),
    ];
    for (field, v) in fields {
        if let Some(v) = v {
            positive(format!("{prefix}.{field}"), v)?;
        }
    }
    if let Some(omega) = value.acentric_factor
        && !omega.is_finite()
    {
        return Err(invalid(format!("{prefix}.acentric_factor"), omega, "must be finite"));
    }
    Ok(())
}

fn validate_sweep(sweep: &SweepDef) -> Result<(), ValidationError> {
    let quantity = match sweep.variable {
        ng_eos::SweepVariable::Pressure => Quantity::Pressure,
        ng_eos::SweepVariable::Temperature => Quantity::Temperature,
    };
    let start = check_quantity("sweep.start", &sweep.start, quantity)?;
    let end = check_quantity("sweep.end", &sweep.end, quantity)?;

    if sweep.points < 2 {
        return Err(invalid("sweep.points", sweep.points, "sweep must have at least 2 points"));
    }
    if (start - end).abs() < 1e-12 {
        return Err(invalid("sweep.end", &sweep.end, "start and end values must be different"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConditionsDef, SolverDef};
    use ng_eos::{SweepType, SweepVariable};
    use std::collections::BTreeMap;

    fn base_case() -> CaseFile {
        CaseFile {
            version: 1,
            name: "Pipeline gas".to_string(),
            eos: Default::default(),
            conditions: ConditionsDef {
                pressure: QuantityInput::from("50 bar"),
                temperature: QuantityInput::from("15 C"),
            },
            composition: BTreeMap::from([
                ("Methane".to_string(), 0.9),
                ("Ethane".to_string(), 0.07),
                ("Nitrogen".to_string(), 0.03),
            ]),
            overrides: BTreeMap::new(),
            custom_species: vec![],
            composition_tolerance: None,
            solver: None,
            sweep: None,
        }
    }

    #[test]
    fn valid_case_passes() {
        validate_case(&base_case()).unwrap();
    }

    #[test]
    fn empty_composition_is_missing() {
        let mut case = base_case();
        case.composition.clear();
        let err = validate_case(&case).unwrap_err();
        assert_eq!(err.field(), "composition");
    }

    #[test]
    fn bad_pressure_text_points_at_field() {
        let mut case = base_case();
        case.conditions.pressure = QuantityInput::from("14.7 psi");
        let err = validate_case(&case).unwrap_err();
        assert_eq!(err.field(), "conditions.pressure");

        case.conditions.pressure = QuantityInput::Si(0.0);
        assert_eq!(validate_case(&case).unwrap_err().field(), "conditions.pressure");
    }

    #[test]
    fn fraction_out_of_range_points_at_species() {
        let mut case = base_case();
        case.composition.insert("Ethane".to_string(), 1.2);
        let err = validate_case(&case).unwrap_err();
        assert_eq!(err.field(), "composition.Ethane");
    }

    #[test]
    fn alias_duplicates_are_rejected() {
        let mut case = base_case();
        case.composition.insert("CH4".to_string(), 0.0);
        assert!(matches!(validate_case(&case), Err(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn invalid_sweep_settings() {
        let mut case = base_case();
        case.sweep = Some(SweepDef {
            variable: SweepVariable::Pressure,
            start: QuantityInput::from("1 bar"),
            end: QuantityInput::from("100 bar"),
            points: 1,
            spacing: SweepType::Logarithmic,
        });
        assert_eq!(validate_case(&case).unwrap_err().field(), "sweep.points");

        case.sweep = Some(SweepDef {
            variable: SweepVariable::Temperature,
            start: QuantityInput::from("300 K"),
            end: QuantityInput::from("26.85 C"),
            points: 5,
            spacing: SweepType::Linear,
        });
        assert_eq!(validate_case(&case).unwrap_err().field(), "sweep.end");
    }

    #[test]
    fn custom_species_and_overrides_are_checked() {
        let mut case = base_case();
        case.custom_species.push(CustomSpeciesDef {
            name: "C7+".to_string(),
            critical_temperature: 540.0,
            critical_pressure: -2.7e6,
            molar_mass: 0.1,
            acentric_factor: Some(0.35),
        });
        assert_eq!(
            validate_case(&case).unwrap_err().field(),
            "custom_species[0].critical_pressure"
        );

        let mut case = base_case();
        case.overrides.insert(
            "Methane".to_string(),
            SpeciesOverride {
                molar_mass: Some(0.0),
                ..SpeciesOverride::default()
            },
        );
        assert_eq!(validate_case(&case).unwrap_err().field(), "overrides.Methane.molar_mass");
    }

    #[test]
    fn solver_settings_are_checked() {
        let mut case = base_case();
        case.solver = Some(SolverDef {
            max_iterations: Some(0),
            abs_tol: None,
        });
        assert_eq!(validate_case(&case).unwrap_err().field(), "solver.max_iterations");
    }

    #[test]
    fn future_version_is_unsupported() {
        let mut case = base_case();
        case.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_case(&case),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
