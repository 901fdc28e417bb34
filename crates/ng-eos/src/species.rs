//! Chemical species selectable for a natural-gas mixture.

use crate::catalog::{SpeciesCatalogEntry, species_catalog};

/// Components of natural gas and its common contaminants.
///
/// Discriminants index into the static species catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Methane (CH₄)
    Methane,
    /// Ethane (C₂H₆)
    Ethane,
    /// Propane (C₃H₈)
    Propane,
    /// n-Butane (C₄H₁₀)
    NButane,
    /// n-Pentane (C₅H₁₂)
    NPentane,
    /// n-Hexane (C₆H₁₄)
    NHexane,
    /// n-Heptane (C₇H₁₆)
    NHeptane,
    /// n-Octane (C₈H₁₈)
    NOctane,
    /// n-Nonane (C₉H₂₀)
    NNonane,
    /// n-Decane (C₁₀H₂₂)
    NDecane,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Hydrogen (H₂)
    H2,
    /// Hydrogen sulfide (H₂S)
    H2S,
    /// Helium (He)
    He,
    /// Water vapour (H₂O)
    H2O,
    /// Benzene (C₆H₆)
    Benzene,
    /// Toluene (C₇H₈)
    Toluene,
    /// Xylenes (C₈H₁₀), represented by p-xylene
    Xylenes,
    /// Ethylene (C₂H₄)
    Ethylene,
    /// Propylene (C₃H₆)
    Propylene,
    /// Carbonyl sulfide (COS)
    CarbonylSulfide,
    /// Carbon disulfide (CS₂)
    CarbonDisulfide,
    /// Argon (Ar)
    Ar,
    /// Neon (Ne)
    Neon,
}

impl Species {
    pub const ALL: [Species; 26] = [
        Species::Methane,
        Species::Ethane,
        Species::Propane,
        Species::NButane,
        Species::NPentane,
        Species::NHexane,
        Species::NHeptane,
        Species::NOctane,
        Species::NNonane,
        Species::NDecane,
        Species::CO2,
        Species::N2,
        Species::O2,
        Species::H2,
        Species::H2S,
        Species::He,
        Species::H2O,
        Species::Benzene,
        Species::Toluene,
        Species::Xylenes,
        Species::Ethylene,
        Species::Propylene,
        Species::CarbonylSulfide,
        Species::CarbonDisulfide,
        Species::Ar,
        Species::Neon,
    ];

    /// Catalog row holding this species' names and critical data.
    pub fn entry(&self) -> &'static SpeciesCatalogEntry {
        &species_catalog()[*self as usize]
    }

    /// Canonical identifier used as the table key.
    pub fn key(&self) -> &'static str {
        self.entry().canonical_id
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        self.entry().display_name
    }

    /// Chemical formula with subscripts, as shown in selection lists.
    pub fn formula(&self) -> &'static str {
        self.entry().formula
    }

    /// Selection-list label, e.g. `Ethane (C₂H₆)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.display_name(), self.formula())
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        if wanted.is_empty() {
            return Err("empty species name");
        }
        species_catalog()
            .iter()
            .find(|entry| {
                normalize_name(entry.canonical_id) == wanted
                    || normalize_name(entry.display_name) == wanted
                    || normalize_name(entry.formula) == wanted
                    || entry
                        .aliases
                        .iter()
                        .any(|alias| normalize_name(alias) == wanted)
            })
            .map(|entry| entry.species)
            .ok_or("unknown species")
    }
}

/// Reduce a user-entered name to a comparison form.
///
/// A trailing parenthesised formula (`"Ethane (C₂H₆)"`) is dropped, then
/// everything except letters and digits is removed and the rest lower-cased.
/// Subscript digits fold to ASCII so `"CO₂"` and `"CO2"` compare equal.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let base = match trimmed.find(" (") {
        Some(idx) if trimmed.ends_with(')') => &trimmed[..idx],
        _ => trimmed,
    };
    base.chars()
        .filter_map(fold_subscript)
        .filter(|c| c.is_ascii_alphanumeric() || c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Table key for any species name: the canonical id for built-in species
/// (whatever alias was used), the normalized name otherwise.
pub fn canonical_key(name: &str) -> String {
    match name.parse::<Species>() {
        Ok(species) => normalize_name(species.key()),
        Err(_) => normalize_name(name),
    }
}

fn fold_subscript(c: char) -> Option<char> {
    match c {
        '₀'..='₉' => char::from_digit(c as u32 - '₀' as u32, 10),
        _ => Some(c),
    }
}
