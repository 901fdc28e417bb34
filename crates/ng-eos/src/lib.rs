//! ng-eos: volumetric properties of natural-gas mixtures from cubic equations of state.
//!
//! Provides:
//! - Species definitions and a built-in table of critical data
//! - Composition handling with mole-fraction validation
//! - Van der Waals, Redlich-Kwong, Soave-Redlich-Kwong and Peng-Robinson
//! - One-fluid mixing rules
//! - A Newton root solver for the molar volume
//! - Parallel pressure and temperature sweeps
//!
//! # Architecture
//!
//! Evaluation is a pipeline of pure steps: look up each species (caller
//! overrides first), compute its `(a, b)` with the selected [`CubicEos`],
//! mix, solve the cubic for `Vm`, then derive `Z = PVm/RT` and `ρ = M/Vm`.
//! [`EosEngine`] holds the read-only table and settings and can be shared
//! across threads.
//!
//! # Example
//!
//! ```no_run
//! use ng_eos::{Composition, EosEngine, EosKind, StateConditions};
//!
//! let comp = Composition::new([("Methane", 0.9), ("Ethane", 0.07), ("Nitrogen", 0.03)]).unwrap();
//! let cond = StateConditions::from_si(50.0e5, 288.15).unwrap();
//!
//! let engine = EosEngine::builtin().with_eos(EosKind::PengRobinson);
//! let result = engine.evaluate(&comp, &cond).unwrap();
//! println!("Z = {:.4}, ρ = {:.3} kg/m³", result.compressibility_factor, result.density_kg_m3());
//! ```

pub mod catalog;
pub mod composition;
pub mod engine;
pub mod eos;
pub mod error;
pub mod mixing;
pub mod properties;
pub mod solver;
pub mod species;
pub mod state;
pub mod sweep_executor;
pub mod sweeps;
pub mod table;

// Re-exports for ergonomics
pub use catalog::{SpeciesCatalogEntry, filter_species_catalog, species_catalog};
pub use composition::{Composition, DEFAULT_SUM_TOLERANCE};
pub use engine::{EosEngine, PropertyResult, evaluate};
pub use eos::{
    CubicEos, CubicForm, EosKind, PengRobinson, PureParameters, RedlichKwong, SoaveRedlichKwong,
    VanDerWaals,
};
pub use error::{EosError, EosResult};
pub use mixing::{MixtureParameters, ResolvedComponent, mix};
pub use properties::{SpeciesOverride, SpeciesProperties};
pub use solver::{CubicSolution, CubicSolver, SolverConfig, solve_molar_volume};
pub use species::{Species, canonical_key, normalize_name};
pub use state::StateConditions;
pub use sweep_executor::{
    SweepPoint, SweepResult, execute_pressure_sweep_at_temperature, execute_sweep,
    execute_temperature_sweep_at_pressure,
};
pub use sweeps::{SweepDefinition, SweepType, SweepVariable};
pub use table::{ReferenceTable, SpeciesOverrides, TableEntry};
