use super::{CubicEos, CubicForm, PureParameters};
use crate::error::EosResult;
use crate::properties::SpeciesProperties;
use ng_core::constants::R_J_PER_MOL_K as R;

/// Van der Waals: temperature-independent `a`, no acentric factor.
///
/// `a = 27/64 · R²Tc²/Pc`, `b = RTc/(8Pc)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VanDerWaals;

impl CubicEos for VanDerWaals {
    fn name(&self) -> &str {
        "Van der Waals"
    }

    fn form(&self) -> CubicForm {
        CubicForm::VAN_DER_WAALS
    }

    fn pure_parameters(
        &self,
        _species: &str,
        props: &SpeciesProperties,
        _t_k: f64,
    ) -> EosResult<PureParameters> {
        let tc = props.critical_temperature;
        let pc = props.critical_pressure;
        Ok(PureParameters {
            a: (27.0 / 64.0) * (R * R * tc * tc) / pc,
            b: (R * tc) / (8.0 * pc),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methane_parameters() {
        let props = SpeciesProperties::new(190.6, 4_599_000.0, 0.016);
        let p = VanDerWaals.pure_parameters("Methane", &props, 298.15).unwrap();
        // Tabulated vdW constants for methane: a ≈ 0.2303 Pa·m⁶/mol², b ≈ 4.31e-5 m³/mol
        assert!((p.a - 0.2303).abs() < 2e-3, "a = {}", p.a);
        assert!((p.b - 4.307e-5).abs() < 1e-7, "b = {}", p.b);
    }

    #[test]
    fn independent_of_temperature() {
        let props = SpeciesProperties::new(305.3, 4_872_000.0, 0.030);
        let cold = VanDerWaals.pure_parameters("Ethane", &props, 200.0).unwrap();
        let hot = VanDerWaals.pure_parameters("Ethane", &props, 600.0).unwrap();
        assert_eq!(cold, hot);
    }
}
