//! Mixture evaluation: lookup, pure parameters, mixing, root solve.

use crate::composition::Composition;
use crate::eos::{CubicEos, EosKind, PureParameters};
use crate::error::EosResult;
use crate::mixing::{MixtureParameters, ResolvedComponent, mix};
use crate::properties::{SpeciesOverride, SpeciesProperties};
use crate::solver::{CubicSolver, SolverConfig};
use crate::state::{StateConditions, check_temperature};
use crate::table::{ReferenceTable, SpeciesOverrides};
use ng_core::constants::R_J_PER_MOL_K as R;
use ng_core::units::{Density, MolarVolume, kg_per_m3, m3_per_mol};
use ng_core::ensure_finite;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uom::si::{mass_density::kilogram_per_cubic_meter, molar_volume::cubic_meter_per_mole};

/// Volumetric properties of one evaluated state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyResult {
    pub molar_volume: MolarVolume,
    pub compressibility_factor: f64,
    pub density: Density,
}

impl PropertyResult {
    pub fn molar_volume_m3_per_mol(&self) -> f64 {
        self.molar_volume.get::<cubic_meter_per_mole>()
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.density.get::<kilogram_per_cubic_meter>()
    }

    /// Three-line text block with SI values.
    pub fn summary(&self) -> String {
        format!(
            "Molar volume: {:.6e} m³/mol\nCompressibility factor Z: {:.6}\nDensity: {:.6} kg/m³",
            self.molar_volume_m3_per_mol(),
            self.compressibility_factor,
            self.density_kg_m3()
        )
    }
}

impl fmt::Display for PropertyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vm = {:.6e} m³/mol, Z = {:.6}, ρ = {:.6} kg/m³",
            self.molar_volume_m3_per_mol(),
            self.compressibility_factor,
            self.density_kg_m3()
        )
    }
}

/// Evaluates mixtures against a shared, read-only reference table.
///
/// The engine holds no mutable state, so one instance can be shared between
/// threads and every call with the same inputs returns the same result.
#[derive(Debug, Clone)]
pub struct EosEngine {
    table: Arc<ReferenceTable>,
    kind: EosKind,
    solver: SolverConfig,
    overrides: SpeciesOverrides,
}

impl EosEngine {
    pub fn new(table: Arc<ReferenceTable>) -> Self {
        Self {
            table,
            kind: EosKind::default(),
            solver: SolverConfig::default(),
            overrides: SpeciesOverrides::new(),
        }
    }

    /// Engine over the built-in table with Van der Waals.
    pub fn builtin() -> Self {
        Self::new(ReferenceTable::shared_builtin())
    }

    pub fn with_eos(mut self, kind: EosKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.solver = config;
        self
    }

    pub fn with_override(mut self, name: &str, value: SpeciesOverride) -> Self {
        self.overrides.insert(name, value);
        self
    }

    pub fn with_overrides(mut self, overrides: SpeciesOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn eos(&self) -> EosKind {
        self.kind
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    pub fn solver_config(&self) -> &SolverConfig {
        &self.solver
    }

    /// Critical data for `name`, overrides applied.
    pub fn lookup_species(&self, name: &str) -> EosResult<SpeciesProperties> {
        self.overrides.resolve(&self.table, name)
    }

    /// `(a, b)` of one species at `t_k` for the selected variant.
    pub fn compute_pure_parameters(&self, name: &str, t_k: f64) -> EosResult<PureParameters> {
        check_temperature(t_k)?;
        let props = self.lookup_species(name)?;
        self.kind.model().pure_parameters(name, &props, t_k)
    }

    /// Look up and parameterize every component of `composition`.
    pub fn resolve(&self, composition: &Composition, t_k: f64) -> EosResult<Vec<ResolvedComponent>> {
        check_temperature(t_k)?;
        let model: &dyn CubicEos = self.kind.model();
        composition
            .names()
            .map(|name| {
                let properties = self.lookup_species(name)?;
                let params = model.pure_parameters(name, &properties, t_k)?;
                Ok(ResolvedComponent {
                    name: name.to_string(),
                    properties,
                    params,
                })
            })
            .collect()
    }

    pub fn mixture_parameters(&self, composition: &Composition, t_k: f64) -> EosResult<MixtureParameters> {
        let resolved = self.resolve(composition, t_k)?;
        let params = mix(composition, &resolved)?;
        debug!(
            eos = self.kind.model().name(),
            a_mix = params.a_mix,
            b_mix = params.b_mix,
            molar_mass_mix = params.molar_mass_mix,
            "mixture parameters"
        );
        Ok(params)
    }

    /// Molar volume [m³/mol] for already-mixed parameters.
    pub fn solve_molar_volume(&self, p_pa: f64, t_k: f64, a_mix: f64, b_mix: f64) -> EosResult<f64> {
        CubicSolver::new(self.kind.model().form(), self.solver).solve_molar_volume(p_pa, t_k, a_mix, b_mix)
    }

    /// Molar volume, compressibility factor and density of `composition` at `conditions`.
    pub fn evaluate(&self, composition: &Composition, conditions: &StateConditions) -> EosResult<PropertyResult> {
        let p = conditions.pressure_pa();
        let t = conditions.temperature_k();

        let mixture = self.mixture_parameters(composition, t)?;
        let vm = self.solve_molar_volume(p, t, mixture.a_mix, mixture.b_mix)?;

        let z = ensure_finite(p * vm / (R * t), "compressibility factor")?;
        let rho = ensure_finite(mixture.molar_mass_mix / vm, "density")?;

        Ok(PropertyResult {
            molar_volume: m3_per_mol(vm),
            compressibility_factor: z,
            density: kg_per_m3(rho),
        })
    }
}

impl Default for EosEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Evaluate with the built-in table, Van der Waals and default solver settings.
pub fn evaluate(composition: &Composition, conditions: &StateConditions) -> EosResult<PropertyResult> {
    EosEngine::builtin().evaluate(composition, conditions)
}
