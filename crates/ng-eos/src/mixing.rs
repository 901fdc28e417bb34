//! Van der Waals one-fluid mixing rules.

use crate::composition::Composition;
use crate::eos::PureParameters;
use crate::error::{EosError, EosResult};
use crate::properties::SpeciesProperties;
use crate::species::canonical_key;

/// One component after lookup and pure-parameter evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent {
    pub name: String,
    pub properties: SpeciesProperties,
    pub params: PureParameters,
}

/// Mixture-level EOS parameters for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureParameters {
    /// Σᵢ Σⱼ yᵢ yⱼ √(aᵢ aⱼ) [Pa·m⁶/mol²]
    pub a_mix: f64,
    /// Σᵢ yᵢ bᵢ [m³/mol]
    pub b_mix: f64,
    /// Σᵢ yᵢ Mᵢ [kg/mol]
    pub molar_mass_mix: f64,
}

/// Apply the mixing rules to `composition` using already-resolved components.
///
/// Every composition entry must have a matching resolved component; a gap is
/// reported as `MissingComponentData` rather than dropped from the sums.
pub fn mix(composition: &Composition, resolved: &[ResolvedComponent]) -> EosResult<MixtureParameters> {
    let terms = composition
        .iter()
        .map(|(name, y)| {
            let key = canonical_key(name);
            resolved
                .iter()
                .find(|c| canonical_key(&c.name) == key)
                .map(|c| (y, c))
                .ok_or_else(|| EosError::MissingComponentData {
                    species: name.to_string(),
                    what: "resolved EOS parameters",
                })
        })
        .collect::<EosResult<Vec<_>>>()?;

    let mut a_mix = 0.0;
    for (y_i, c_i) in &terms {
        for (y_j, c_j) in &terms {
            a_mix += y_i * y_j * (c_i.params.a * c_j.params.a).sqrt();
        }
    }
    let b_mix: f64 = terms.iter().map(|(y, c)| y * c.params.b).sum();
    let molar_mass_mix: f64 = terms.iter().map(|(y, c)| y * c.properties.molar_mass).sum();

    Ok(MixtureParameters {
        a_mix,
        b_mix,
        molar_mass_mix,
    })
}
