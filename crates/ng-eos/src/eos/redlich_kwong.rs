use super::{CubicEos, CubicForm, PureParameters, soave_alpha};
use crate::error::EosResult;
use crate::properties::SpeciesProperties;
use ng_core::constants::R_J_PER_MOL_K as R;

const OMEGA_A: f64 = 0.42748;
const OMEGA_B: f64 = 0.08664;

fn critical_ab(props: &SpeciesProperties) -> (f64, f64) {
    let tc = props.critical_temperature;
    let pc = props.critical_pressure;
    (OMEGA_A * R * R * tc * tc / pc, OMEGA_B * R * tc / pc)
}

/// Original Redlich-Kwong: `α = Tr^-½`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedlichKwong;

impl CubicEos for RedlichKwong {
    fn name(&self) -> &str {
        "Redlich-Kwong"
    }

    fn form(&self) -> CubicForm {
        CubicForm::REDLICH_KWONG
    }

    fn pure_parameters(
        &self,
        _species: &str,
        props: &SpeciesProperties,
        t_k: f64,
    ) -> EosResult<PureParameters> {
        let (ac, b) = critical_ab(props);
        let tr = t_k / props.critical_temperature;
        Ok(PureParameters {
            a: ac / tr.sqrt(),
            b,
        })
    }
}

/// Soave-Redlich-Kwong: Soave α with `m = 0.480 + 1.574ω - 0.176ω²`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoaveRedlichKwong;

impl SoaveRedlichKwong {
    pub fn m(omega: f64) -> f64 {
        0.480 + 1.574 * omega - 0.176 * omega * omega
    }
}

impl CubicEos for SoaveRedlichKwong {
    fn name(&self) -> &str {
        "Soave-Redlich-Kwong"
    }

    fn form(&self) -> CubicForm {
        CubicForm::REDLICH_KWONG
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
        let (ac, b) = critical_ab(props);
        let tr = t_k / props.critical_temperature;
        Ok(PureParameters {
            a: ac * soave_alpha(Self::m(omega), tr),
            b,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EosError;

    fn methane() -> SpeciesProperties {
        SpeciesProperties::new(190.6, 4_599_000.0, 0.016).with_acentric_factor(0.012)
    }

    #[test]
    fn rk_and_srk_share_covolume() {
        let rk = RedlichKwong.pure_parameters("Methane", &methane(), 300.0).unwrap();
        let srk = SoaveRedlichKwong
            .pure_parameters("Methane", &methane(), 300.0)
            .unwrap();
        assert_eq!(rk.b, srk.b);
        assert!((rk.b - 2.985e-5).abs() < 1e-7, "b = {}", rk.b);
    }

    #[test]
    fn rk_attraction_falls_with_temperature() {
        let cold = RedlichKwong.pure_parameters("Methane", &methane(), 200.0).unwrap();
        let hot = RedlichKwong.pure_parameters("Methane", &methane(), 400.0).unwrap();
        assert!(hot.a < cold.a);
    }

    #[test]
    fn srk_at_critical_temperature_uses_critical_attraction() {
        let props = methane();
        let at_tc = SoaveRedlichKwong
            .pure_parameters("Methane", &props, props.critical_temperature)
            .unwrap();
        let (ac, _) = critical_ab(&props);
        assert!((at_tc.a - ac).abs() < 1e-12);
    }

    #[test]
    fn srk_needs_acentric_factor() {
        let props = SpeciesProperties::new(400.0, 3.5e6, 0.05);
        let err = SoaveRedlichKwong
            .pure_parameters("MyPseudo", &props, 300.0)
            .unwrap_err();
        assert_eq!(
            err,
            EosError::MissingComponentData {
                species: "MyPseudo".into(),
                what: "acentric factor"
            }
        );
    }
}
