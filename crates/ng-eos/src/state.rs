//! Pressure/temperature pair for one evaluation.

use crate::error::{EosError, EosResult};
use ng_core::ensure_positive;
use ng_core::units::{Pressure, Temperature, k, pa};
use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin};

/// Validated state conditions: both values finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateConditions {
    p: Pressure,
    t: Temperature,
}

impl StateConditions {
    pub fn new(p: Pressure, t: Temperature) -> EosResult<Self> {
        check_pressure(p.get::<pascal>())?;
        check_temperature(t.get::<kelvin>())?;
        Ok(Self { p, t })
    }

    /// Build from pascals and kelvins.
    pub fn from_si(pressure_pa: f64, temperature_k: f64) -> EosResult<Self> {
        Self::new(pa(pressure_pa), k(temperature_k))
    }

    pub fn pressure(&self) -> Pressure {
        self.p
    }

    pub fn temperature(&self) -> Temperature {
        self.t
    }

    pub fn pressure_pa(&self) -> f64 {
        self.p.get::<pascal>()
    }

    pub fn temperature_k(&self) -> f64 {
        self.t.get::<kelvin>()
    }
}

/// Pressure [Pa] the engine accepts: finite and strictly positive.
pub(crate) fn check_pressure(p_pa: f64) -> EosResult<f64> {
    ensure_positive(p_pa, "pressure").map_err(|_| EosError::InvalidConditions {
        what: "pressure must be positive and finite",
    })
}

/// Temperature [K] the engine accepts: finite and strictly positive.
pub(crate) fn check_temperature(t_k: f64) -> EosResult<f64> {
    ensure_positive(t_k, "temperature").map_err(|_| EosError::InvalidConditions {
        what: "temperature must be positive and finite",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_valid_conditions() {
        let cond = StateConditions::from_si(101_325.0, 298.15).unwrap();
        assert_eq!(cond.pressure_pa(), 101_325.0);
        assert_eq!(cond.temperature_k(), 298.15);
    }

    #[test]
    fn reject_zero_or_negative_pressure() {
        for p in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = StateConditions::from_si(p, 300.0).unwrap_err();
            assert!(matches!(err, EosError::InvalidConditions { .. }));
            assert_eq!(err.field(), "pressure");
        }
    }

    #[test]
    fn reject_non_positive_temperature() {
        let err = StateConditions::from_si(101_325.0, 0.0).unwrap_err();
        assert_eq!(err.field(), "temperature");
        assert!(StateConditions::from_si(101_325.0, -5.0).is_err());
    }
}
