use super::{CubicEos, CubicForm, PureParameters, soave_alpha};
use crate::error::EosResult;
use crate::properties::SpeciesProperties;
use ng_core::constants::R_J_PER_MOL_K as R;

/// Peng-Robinson (1976).
///
/// `a = 0.45724 · R²Tc²/Pc · α`, `b = 0.07780 · RTc/Pc`,
/// `m = 0.37464 + 1.54226ω - 0.26992ω²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PengRobinson;

impl PengRobinson {
    pub fn m(omega: f64) -> f64 {
        0.37464 + 1.54226 * omega - 0.26992 * omega * omega
    }
}

impl CubicEos for PengRobinson {
    fn name(&self) -> &str {
        "Peng-Robinson"
    }

    fn form(&self) -> CubicForm {
        CubicForm::PENG_ROBINSON
    }

    fn requires_acentric_factor(&self) -> bool {
        true
    }

    fn pure_parameters(
        &self,
        species: &str,
        props: &SpeciesProperties,
        t_k: f64,
    ) -> EosResult<PureParameters> {
        let omega = props.require_acentric_factor(species)?;
        let tc = props.critical_temperature;
        let pc = props.critical_pressure;
        let tr = t_k / tc;
        Ok(PureParameters {
            a: 0.45724 * R * R * tc * tc / pc * soave_alpha(Self::m(omega), tr),
            b: 0.07780 * R * tc / pc,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methane_covolume() {
        let props = SpeciesProperties::new(190.6, 4_599_000.0, 0.016).with_acentric_factor(0.012);
        let p = PengRobinson.pure_parameters("Methane", &props, 300.0).unwrap();
        assert!((p.b - 2.681e-5).abs() < 1e-7, "b = {}", p.b);
        assert!(p.a > 0.0);
    }

    #[test]
    fn m_polynomial() {
        assert!((PengRobinson::m(0.0) - 0.37464).abs() < 1e-15);
        assert!((PengRobinson::m(0.1) - (0.37464 + 0.154226 - 0.0026992)).abs() < 1e-12);
    }
}
