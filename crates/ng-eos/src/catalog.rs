//! Static reference data for the built-in species.
//!
//! Critical constants follow Poling, Prausnitz & O'Connell, *The Properties of
//! Gases and Liquids* (5th ed.), rounded to the precision shown there.

use crate::Species;
use crate::properties::SpeciesProperties;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesCatalogEntry {
    pub species: Species,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub formula: &'static str,
    pub aliases: &'static [&'static str],
    pub critical_temperature_k: f64,
    pub critical_pressure_pa: f64,
    pub acentric_factor: f64,
    pub molar_mass_kg_per_mol: f64,
}

impl SpeciesCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_lowercase().contains(&query)
            || self.display_name.to_lowercase().contains(&query)
            || self.formula.to_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().contains(&query))
    }

    pub fn properties(&self) -> SpeciesProperties {
        SpeciesProperties {
            critical_temperature: self.critical_temperature_k,
            critical_pressure: self.critical_pressure_pa,
            molar_mass: self.molar_mass_kg_per_mol,
            acentric_factor: Some(self.acentric_factor),
        }
    }
}

const SPECIES_CATALOG: [SpeciesCatalogEntry; Species::ALL.len()] = [
    SpeciesCatalogEntry {
        species: Species::Methane,
        canonical_id: "Methane",
        display_name: "Methane",
        formula: "CH₄",
        aliases: &["ch4"],
        critical_temperature_k: 190.6,
        critical_pressure_pa: 4_599_000.0,
        acentric_factor: 0.012,
        molar_mass_kg_per_mol: 0.016043,
    },
    SpeciesCatalogEntry {
        species: Species::Ethane,
        canonical_id: "Ethane",
        display_name: "Ethane",
        formula: "C₂H₆",
        aliases: &["c2h6"],
        critical_temperature_k: 305.3,
        critical_pressure_pa: 4_872_000.0,
        acentric_factor: 0.099,
        molar_mass_kg_per_mol: 0.03007,
    },
    SpeciesCatalogEntry {
        species: Species::Propane,
        canonical_id: "Propane",
        display_name: "Propane",
        formula: "C₃H₈",
        aliases: &["c3h8", "n-propane"],
        critical_temperature_k: 369.8,
        critical_pressure_pa: 4_248_000.0,
        acentric_factor: 0.152,
        molar_mass_kg_per_mol: 0.044097,
    },
    SpeciesCatalogEntry {
        species: Species::NButane,
        canonical_id: "nButane",
        display_name: "n-Butane",
        formula: "C₄H₁₀",
        aliases: &["butane", "n-butane"],
        critical_temperature_k: 425.1,
        critical_pressure_pa: 3_796_000.0,
        acentric_factor: 0.2,
        molar_mass_kg_per_mol: 0.058123,
    },
    SpeciesCatalogEntry {
        species: Species::NPentane,
        canonical_id: "nPentane",
        display_name: "n-Pentane",
        formula: "C₅H₁₂",
        aliases: &["pentane", "n-pentane"],
        critical_temperature_k: 469.7,
        critical_pressure_pa: 3_370_000.0,
        acentric_factor: 0.252,
        molar_mass_kg_per_mol: 0.07215,
    },
    SpeciesCatalogEntry {
        species: Species::NHexane,
        canonical_id: "nHexane",
        display_name: "n-Hexane",
        formula: "C₆H₁₄",
        aliases: &["hexane", "n-hexane"],
        critical_temperature_k: 507.6,
        critical_pressure_pa: 3_025_000.0,
        acentric_factor: 0.301,
        molar_mass_kg_per_mol: 0.086177,
    },
    SpeciesCatalogEntry {
        species: Species::NHeptane,
        canonical_id: "nHeptane",
        display_name: "n-Heptane",
        formula: "C₇H₁₆",
        aliases: &["heptane", "n-heptane"],
        critical_temperature_k: 540.2,
        critical_pressure_pa: 2_740_000.0,
        acentric_factor: 0.35,
        molar_mass_kg_per_mol: 0.100204,
    },
    SpeciesCatalogEntry {
        species: Species::NOctane,
        canonical_id: "nOctane",
        display_name: "n-Octane",
        formula: "C₈H₁₈",
        aliases: &["octane", "n-octane"],
        critical_temperature_k: 568.7,
        critical_pressure_pa: 2_490_000.0,
        acentric_factor: 0.399,
        molar_mass_kg_per_mol: 0.114231,
    },
    SpeciesCatalogEntry {
        species: Species::NNonane,
        canonical_id: "nNonane",
        display_name: "n-Nonane",
        formula: "C₉H₂₀",
        aliases: &["nonane", "n-nonane"],
        critical_temperature_k: 594.6,
        critical_pressure_pa: 2_290_000.0,
        acentric_factor: 0.445,
        molar_mass_kg_per_mol: 0.128258,
    },
    SpeciesCatalogEntry {
        species: Species::NDecane,
        canonical_id: "nDecane",
        display_name: "n-Decane",
        formula: "C₁₀H₂₂",
        aliases: &["decane", "n-decane"],
        critical_temperature_k: 617.7,
        critical_pressure_pa: 2_110_000.0,
        acentric_factor: 0.49,
        molar_mass_kg_per_mol: 0.142285,
    },
    SpeciesCatalogEntry {
        species: Species::CO2,
        canonical_id: "CO2",
        display_name: "Carbon Dioxide",
        formula: "CO₂",
        aliases: &["carbon dioxide"],
        critical_temperature_k: 304.1,
        critical_pressure_pa: 7_380_000.0,
        acentric_factor: 0.225,
        molar_mass_kg_per_mol: 0.04401,
    },
    SpeciesCatalogEntry {
        species: Species::N2,
        canonical_id: "N2",
        display_name: "Nitrogen",
        formula: "N₂",
        aliases: &["nitrogen"],
        critical_temperature_k: 126.2,
        critical_pressure_pa: 3_394_000.0,
        acentric_factor: 0.039,
        molar_mass_kg_per_mol: 0.028014,
    },
    SpeciesCatalogEntry {
        species: Species::O2,
        canonical_id: "O2",
        display_name: "Oxygen",
        formula: "O₂",
        aliases: &["oxygen"],
        critical_temperature_k: 154.6,
        critical_pressure_pa: 5_043_000.0,
        acentric_factor: 0.022,
        molar_mass_kg_per_mol: 0.031999,
    },
    SpeciesCatalogEntry {
        species: Species::H2,
        canonical_id: "H2",
        display_name: "Hydrogen",
        formula: "H₂",
        aliases: &["hydrogen"],
        critical_temperature_k: 33.19,
        critical_pressure_pa: 1_313_000.0,
        acentric_factor: -0.216,
        molar_mass_kg_per_mol: 0.002016,
    },
    SpeciesCatalogEntry {
        species: Species::H2S,
        canonical_id: "H2S",
        display_name: "Hydrogen Sulfide",
        formula: "H₂S",
        aliases: &["hydrogen sulfide", "hydrogen sulphide"],
        critical_temperature_k: 373.4,
        critical_pressure_pa: 8_963_000.0,
        acentric_factor: 0.09,
        molar_mass_kg_per_mol: 0.034082,
    },
    SpeciesCatalogEntry {
        species: Species::He,
        canonical_id: "He",
        display_name: "Helium",
        formula: "He",
        aliases: &["helium"],
        critical_temperature_k: 5.19,
        critical_pressure_pa: 227_000.0,
        acentric_factor: -0.39,
        molar_mass_kg_per_mol: 0.004003,
    },
    SpeciesCatalogEntry {
        species: Species::H2O,
        canonical_id: "H2O",
        display_name: "Water Vapor",
        formula: "H₂O",
        aliases: &["water", "water vapour", "steam"],
        critical_temperature_k: 647.1,
        critical_pressure_pa: 22_064_000.0,
        acentric_factor: 0.345,
        molar_mass_kg_per_mol: 0.018015,
    },
    SpeciesCatalogEntry {
        species: Species::Benzene,
        canonical_id: "Benzene",
        display_name: "Benzene",
        formula: "C₆H₆",
        aliases: &["c6h6"],
        critical_temperature_k: 562.0,
        critical_pressure_pa: 4_898_000.0,
        acentric_factor: 0.21,
        molar_mass_kg_per_mol: 0.078114,
    },
    SpeciesCatalogEntry {
        species: Species::Toluene,
        canonical_id: "Toluene",
        display_name: "Toluene",
        formula: "C₇H₈",
        aliases: &["c7h8", "methylbenzene"],
        critical_temperature_k: 591.8,
        critical_pressure_pa: 4_108_000.0,
        acentric_factor: 0.263,
        molar_mass_kg_per_mol: 0.092141,
    },
    SpeciesCatalogEntry {
        species: Species::Xylenes,
        canonical_id: "Xylenes",
        display_name: "Xylenes",
        formula: "C₈H₁₀",
        aliases: &["xylene", "p-xylene"],
        critical_temperature_k: 616.2,
        critical_pressure_pa: 3_511_000.0,
        acentric_factor: 0.321,
        molar_mass_kg_per_mol: 0.106167,
    },
    SpeciesCatalogEntry {
        species: Species::Ethylene,
        canonical_id: "Ethylene",
        display_name: "Ethylene",
        formula: "C₂H₄",
        aliases: &["ethene"],
        critical_temperature_k: 282.3,
        critical_pressure_pa: 5_041_000.0,
        acentric_factor: 0.087,
        molar_mass_kg_per_mol: 0.028054,
    },
    SpeciesCatalogEntry {
        species: Species::Propylene,
        canonical_id: "Propylene",
        display_name: "Propylene",
        formula: "C₃H₆",
        aliases: &["propene"],
        critical_temperature_k: 364.9,
        critical_pressure_pa: 4_600_000.0,
        acentric_factor: 0.142,
        molar_mass_kg_per_mol: 0.042081,
    },
    SpeciesCatalogEntry {
        species: Species::CarbonylSulfide,
        canonical_id: "COS",
        display_name: "Carbonyl Sulfide",
        formula: "COS",
        aliases: &["carbonyl sulfide", "carbonyl sulphide"],
        critical_temperature_k: 378.8,
        critical_pressure_pa: 6_349_000.0,
        acentric_factor: 0.097,
        molar_mass_kg_per_mol: 0.060075,
    },
    SpeciesCatalogEntry {
        species: Species::CarbonDisulfide,
        canonical_id: "CS2",
        display_name: "Carbon Disulfide",
        formula: "CS₂",
        aliases: &["carbon disulfide", "carbon disulphide"],
        critical_temperature_k: 552.0,
        critical_pressure_pa: 7_900_000.0,
        acentric_factor: 0.111,
        molar_mass_kg_per_mol: 0.076139,
    },
    SpeciesCatalogEntry {
        species: Species::Ar,
        canonical_id: "Ar",
        display_name: "Argon",
        formula: "Ar",
        aliases: &["argon"],
        critical_temperature_k: 150.9,
        critical_pressure_pa: 4_898_000.0,
        acentric_factor: 0.0,
        molar_mass_kg_per_mol: 0.039948,
    },
    SpeciesCatalogEntry {
        species: Species::Neon,
        canonical_id: "Ne",
        display_name: "Neon",
        formula: "Ne",
        aliases: &["neon"],
        critical_temperature_k: 44.4,
        critical_pressure_pa: 2_760_000.0,
        acentric_factor: -0.029,
        molar_mass_kg_per_mol: 0.02018,
    },
];

pub fn species_catalog() -> &'static [SpeciesCatalogEntry] {
    &SPECIES_CATALOG
}

pub fn filter_species_catalog(query: &str) -> Vec<SpeciesCatalogEntry> {
    species_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
