// ng-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, MolarVolume as UomMolarVolume, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type MolarVolume = UomMolarVolume;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn m3_per_mol(v: f64) -> MolarVolume {
    use uom::si::molar_volume::cubic_meter_per_mole;
    MolarVolume::new::<cubic_meter_per_mole>(v)
}

pub mod constants {
    /// Universal gas constant used by every cubic variant [J/(mol·K)].
    pub const R_J_PER_MOL_K: f64 = 8.314;

    /// Standard atmosphere [Pa].
    pub const ATM_PA: f64 = 101_325.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _rho = kg_per_m3(0.65);
        let _vm = m3_per_mol(0.024);
    }

    #[test]
    fn si_values_are_preserved() {
        assert_eq!(pa(4.599e6).value, 4.599e6);
        assert_eq!(k(190.6).value, 190.6);
        assert_eq!(m3_per_mol(0.02446).value, 0.02446);
    }
}
