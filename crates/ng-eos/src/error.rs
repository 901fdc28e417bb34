//! Equation-of-state engine errors.

use ng_core::CoreError;
use thiserror::Error;

/// Result type for engine operations.
pub type EosResult<T> = Result<T, EosError>;

/// Errors that can occur while evaluating a mixture.
///
/// Every failure reaches the caller as one of these; nothing is coerced to a
/// default value and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    /// Mole fractions outside [0, 1], duplicated, or not summing to one.
    #[error("Invalid composition: {reason}")]
    InvalidComposition { reason: String },

    /// Species absent from the reference table with no override supplied.
    #[error("Unknown species '{species}'")]
    UnknownSpecies { species: String },

    /// A component lacks data needed by the mixing rule or the chosen variant.
    #[error("Missing {what} for component '{species}'")]
    MissingComponentData { species: String, what: &'static str },

    /// Newton iteration hit its cap or stagnated.
    #[error("Molar volume solve did not converge after {iterations} iterations (residual = {residual:e})")]
    NonConvergent { iterations: usize, residual: f64 },

    /// Selected cubic root is not a physical molar volume.
    #[error("Non-physical molar volume root: {molar_volume:e} m³/mol")]
    NonPhysicalRoot { molar_volume: f64 },

    /// Pressure or temperature rejected before reaching the solver.
    #[error("Invalid state conditions: {what}")]
    InvalidConditions { what: &'static str },

    /// Sweep bounds or point count rejected.
    #[error("Invalid sweep: {reason}")]
    InvalidSweep { reason: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EosError {
    /// Input field the error points at, for surfacing next to user input.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidComposition { .. } => "composition",
            Self::UnknownSpecies { species } | Self::MissingComponentData { species, .. } => {
                species
            }
            Self::InvalidConditions { what } => {
                if what.starts_with("temperature") {
                    "temperature"
                } else {
                    "pressure"
                }
            }
            Self::InvalidSweep { .. } => "sweep",
            Self::NonConvergent { .. } | Self::NonPhysicalRoot { .. } | Self::Core(_) => "solver",
        }
    }

    /// Short kind label, stable across message wording changes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidComposition { .. } => "InvalidComposition",
            Self::UnknownSpecies { .. } => "UnknownSpecies",
            Self::MissingComponentData { .. } => "MissingComponentData",
            Self::NonConvergent { .. } => "NonConvergent",
            Self::NonPhysicalRoot { .. } => "NonPhysicalRoot",
            Self::InvalidConditions { .. } => "InvalidConditions",
            Self::InvalidSweep { .. } => "InvalidSweep",
            Self::Core(_) => "Numeric",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EosError::UnknownSpecies {
            species: "Unobtainium".into(),
        };
        assert!(err.to_string().contains("Unobtainium"));

        let err = EosError::NonConvergent {
            iterations: 100,
            residual: 1e-3,
        };
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn field_points_at_offending_input() {
        let err = EosError::MissingComponentData {
            species: "MyPseudo".into(),
            what: "molar mass",
        };
        assert_eq!(err.field(), "MyPseudo");

        let err = EosError::InvalidConditions {
            what: "temperature must be positive and finite",
        };
        assert_eq!(err.field(), "temperature");
        assert_eq!(err.kind(), "InvalidConditions");
    }

    #[test]
    fn core_error_converts() {
        let err: EosError = CoreError::InvalidArg { what: "a_mix" }.into();
        assert!(matches!(err, EosError::Core(_)));
    }
}
