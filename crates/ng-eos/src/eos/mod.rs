//! Two-parameter cubic equations of state.
//!
//! Every variant fits the generic form
//!
//! ```text
//! P = RT / (V - b) - a / ((V + εb)(V + σb))
//! ```
//!
//! and differs only in how `a` and `b` follow from critical data and in the
//! constants ε, σ. The solver works from [`CubicForm`] alone, so variants can be
//! swapped without touching it.

mod peng_robinson;
mod redlich_kwong;
mod van_der_waals;

pub use peng_robinson::PengRobinson;
pub use redlich_kwong::{RedlichKwong, SoaveRedlichKwong};
pub use van_der_waals::VanDerWaals;

use crate::error::EosResult;
use crate::properties::SpeciesProperties;
use crate::species::normalize_name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attraction `a` [Pa·m⁶/mol²] and co-volume `b` [m³/mol] of one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PureParameters {
    pub a: f64,
    pub b: f64,
}

/// ε and σ of the generic cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicForm {
    pub epsilon: f64,
    pub sigma: f64,
}

impl CubicForm {
    pub const VAN_DER_WAALS: CubicForm = CubicForm {
        epsilon: 0.0,
        sigma: 0.0,
    };
    pub const REDLICH_KWONG: CubicForm = CubicForm {
        epsilon: 0.0,
        sigma: 1.0,
    };
    pub const PENG_ROBINSON: CubicForm = CubicForm {
        epsilon: 1.0 - std::f64::consts::SQRT_2,
        sigma: 1.0 + std::f64::consts::SQRT_2,
    };

    /// Coefficients `[c2, c1, c0]` of `Z³ + c2·Z² + c1·Z + c0 = 0`, with
    /// `A = a·P/(RT)²` and `B = b·P/(RT)`.
    pub fn z_coefficients(&self, a_dim: f64, b_dim: f64) -> [f64; 3] {
        let (e, s) = (self.epsilon, self.sigma);
        let c2 = (e + s - 1.0) * b_dim - 1.0;
        let c1 = a_dim + e * s * b_dim * b_dim - (e + s) * b_dim * (b_dim + 1.0);
        let c0 = -(a_dim * b_dim + e * s * b_dim * b_dim * (b_dim + 1.0));
        [c2, c1, c0]
    }
}

/// A cubic equation-of-state variant.
///
/// Implementations must be thread-safe (Send + Sync) so one engine can serve
/// parallel evaluations.
pub trait CubicEos: Send + Sync {
    /// Variant name (for logging).
    fn name(&self) -> &str;

    /// ε, σ constants handed to the solver.
    fn form(&self) -> CubicForm;

    /// Whether `pure_parameters` needs the acentric factor.
    fn requires_acentric_factor(&self) -> bool {
        false
    }

    /// `(a, b)` for one component at temperature `t_k`.
    ///
    /// `species` is only used to label errors.
    fn pure_parameters(
        &self,
        species: &str,
        props: &SpeciesProperties,
        t_k: f64,
    ) -> EosResult<PureParameters>;
}

/// Soave-type temperature correction `α = [1 + m(1 - √Tr)]²`.
pub(crate) fn soave_alpha(m: f64, reduced_temperature: f64) -> f64 {
    let term = 1.0 + m * (1.0 - reduced_temperature.sqrt());
    term * term
}

/// Selectable variant, as named by callers and case files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EosKind {
    #[default]
    #[serde(alias = "Van der Waals", alias = "vdw", alias = "VDW")]
    VanDerWaals,
    #[serde(alias = "Peng-Robinson", alias = "pr", alias = "PR")]
    PengRobinson,
    #[serde(alias = "Redlich-Kwong", alias = "rk", alias = "RK")]
    RedlichKwong,
    #[serde(alias = "Soave-Redlich-Kwong", alias = "srk", alias = "SRK")]
    SoaveRedlichKwong,
}

static VAN_DER_WAALS: VanDerWaals = VanDerWaals;
static PENG_ROBINSON: PengRobinson = PengRobinson;
static REDLICH_KWONG: RedlichKwong = RedlichKwong;
static SOAVE_REDLICH_KWONG: SoaveRedlichKwong = SoaveRedlichKwong;

impl EosKind {
    pub const ALL: [EosKind; 4] = [
        EosKind::VanDerWaals,
        EosKind::PengRobinson,
        EosKind::RedlichKwong,
        EosKind::SoaveRedlichKwong,
    ];

    /// Identifier used on the wire (`"PengRobinson"` etc.).
    pub fn key(self) -> &'static str {
        match self {
            Self::VanDerWaals => "VanDerWaals",
            Self::PengRobinson => "PengRobinson",
            Self::RedlichKwong => "RedlichKwong",
            Self::SoaveRedlichKwong => "SoaveRedlichKwong",
        }
    }

    /// Human-readable label, as in the selection drop-down.
    pub fn label(self) -> &'static str {
        match self {
            Self::VanDerWaals => "Van der Waals",
            Self::PengRobinson => "Peng-Robinson",
            Self::RedlichKwong => "Redlich-Kwong",
            Self::SoaveRedlichKwong => "Soave-Redlich-Kwong",
        }
    }

    pub fn model(self) -> &'static dyn CubicEos {
        match self {
            Self::VanDerWaals => &VAN_DER_WAALS,
            Self::PengRobinson => &PENG_ROBINSON,
            Self::RedlichKwong => &REDLICH_KWONG,
            Self::SoaveRedlichKwong => &SOAVE_REDLICH_KWONG,
        }
    }
}

impl fmt::Display for EosKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for EosKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "vanderwaals" | "vdw" => Ok(Self::VanDerWaals),
            "pengrobinson" | "pr" => Ok(Self::PengRobinson),
            "redlichkwong" | "rk" => Ok(Self::RedlichKwong),
            "soaveredlichkwong" | "srk" => Ok(Self::SoaveRedlichKwong),
            _ => Err(format!(
                "unknown equation of state '{s}' (expected VanDerWaals, PengRobinson, RedlichKwong or SoaveRedlichKwong)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kinds() {
        assert_eq!("VanDerWaals".parse::<EosKind>().unwrap(), EosKind::VanDerWaals);
        assert_eq!("Peng-Robinson".parse::<EosKind>().unwrap(), EosKind::PengRobinson);
        assert_eq!("srk".parse::<EosKind>().unwrap(), EosKind::SoaveRedlichKwong);
        assert_eq!("Redlich Kwong".parse::<EosKind>().unwrap(), EosKind::RedlichKwong);
        assert!("BWR".parse::<EosKind>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for kind in EosKind::ALL {
            assert_eq!(kind.to_string().parse::<EosKind>().unwrap(), kind);
            assert_eq!(kind.label().parse::<EosKind>().unwrap(), kind);
        }
        assert_eq!(EosKind::default(), EosKind::VanDerWaals);
    }

    #[test]
    fn van_der_waals_coefficients() {
        // Z³ - (1 + B)Z² + AZ - AB
        let [c2, c1, c0] = CubicForm::VAN_DER_WAALS.z_coefficients(0.3, 0.1);
        assert!((c2 + 1.1).abs() < 1e-15);
        assert!((c1 - 0.3).abs() < 1e-15);
        assert!((c0 + 0.03).abs() < 1e-15);
    }

    #[test]
    fn redlich_kwong_coefficients() {
        // Z³ - Z² + (A - B - B²)Z - AB
        let [c2, c1, c0] = CubicForm::REDLICH_KWONG.z_coefficients(0.3, 0.1);
        assert!((c2 + 1.0).abs() < 1e-15);
        assert!((c1 - (0.3 - 0.1 - 0.01)).abs() < 1e-15);
        assert!((c0 + 0.03).abs() < 1e-15);
    }

    #[test]
    fn peng_robinson_coefficients() {
        // Z³ - (1 - B)Z² + (A - 3B² - 2B)Z - (AB - B² - B³)
        let (a, b) = (0.3, 0.1);
        let [c2, c1, c0] = CubicForm::PENG_ROBINSON.z_coefficients(a, b);
        assert!((c2 + (1.0 - b)).abs() < 1e-14);
        assert!((c1 - (a - 3.0 * b * b - 2.0 * b)).abs() < 1e-14);
        assert!((c0 + (a * b - b * b - b * b * b)).abs() < 1e-14);
    }

    #[test]
    fn soave_alpha_is_one_at_critical_temperature() {
        assert!((soave_alpha(0.5, 1.0) - 1.0).abs() < 1e-15);
        assert!(soave_alpha(0.5, 0.8) > 1.0);
    }

    #[test]
    fn only_soave_variants_need_acentric_factor() {
        assert!(!EosKind::VanDerWaals.model().requires_acentric_factor());
        assert!(!EosKind::RedlichKwong.model().requires_acentric_factor());
        assert!(EosKind::SoaveRedlichKwong.model().requires_acentric_factor());
        assert!(EosKind::PengRobinson.model().requires_acentric_factor());
    }
}
