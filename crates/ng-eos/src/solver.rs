//! Molar-volume root of a cubic equation of state.
//!
//! The cubic is solved in compressibility form `Z³ + c2·Z² + c1·Z + c0 = 0`,
//! which keeps the coefficients of order one whatever the pressure. Newton
//! iteration starts from the ideal-gas guess `Z = 1` (`Vm = RT/P`). After
//! convergence the cubic is deflated so every real root is known, and the
//! root closest to the ideal-gas guess is returned.
//!
//! Picking the root closest to the ideal gas gives the vapour-like volume.
//! Inside the two-phase dome that is a simplification: no Gibbs-energy
//! comparison between liquid and vapour roots is made.

use crate::eos::CubicForm;
use crate::error::{EosError, EosResult};
use crate::state::{check_pressure, check_temperature};
use ng_core::constants::R_J_PER_MOL_K as R;
use tracing::{debug, trace, warn};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum Newton iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the cubic residual in Z form
    pub abs_tol: f64,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-9,
            line_search_beta: 0.5,
            max_line_search_iters: 30,
        }
    }
}

/// Outcome of a molar-volume solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSolution {
    /// Selected molar volume [m³/mol]
    pub molar_volume: f64,
    /// Compressibility factor of the selected root
    pub z: f64,
    /// Newton iterations used
    pub iterations: usize,
    /// Number of distinct real roots of the cubic
    pub real_roots: usize,
}

/// Solver bound to one cubic form.
#[derive(Debug, Clone, Copy)]
pub struct CubicSolver {
    form: CubicForm,
    config: SolverConfig,
}

impl CubicSolver {
    pub fn new(form: CubicForm, config: SolverConfig) -> Self {
        Self { form, config }
    }

    pub fn form(&self) -> CubicForm {
        self.form
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Molar volume [m³/mol] at `p_pa`, `t_k` for mixture parameters `a_mix`, `b_mix`.
    pub fn solve_molar_volume(&self, p_pa: f64, t_k: f64, a_mix: f64, b_mix: f64) -> EosResult<f64> {
        self.solve(p_pa, t_k, a_mix, b_mix).map(|s| s.molar_volume)
    }

    pub fn solve(&self, p_pa: f64, t_k: f64, a_mix: f64, b_mix: f64) -> EosResult<CubicSolution> {
        check_pressure(p_pa)?;
        check_temperature(t_k)?;
        ng_core::ensure_finite(a_mix, "a_mix")?;
        ng_core::ensure_finite(b_mix, "b_mix")?;
        if a_mix < 0.0 || b_mix < 0.0 {
            return Err(ng_core::CoreError::InvalidArg {
                what: "mixture parameters must be non-negative",
            }
            .into());
        }

        let rt = R * t_k;
        let a_dim = a_mix * p_pa / (rt * rt);
        let b_dim = b_mix * p_pa / rt;
        let coeffs = self.form.z_coefficients(a_dim, b_dim);

        let (z_newton, iterations) = self.newton(coeffs)?;
        let roots = real_roots(coeffs, z_newton);

        // Ideal-gas guess is Z = 1; closeness in Z equals closeness in Vm.
        let z = roots
            .iter()
            .copied()
            .min_by(|a, b| (a - 1.0).abs().total_cmp(&(b - 1.0).abs()))
            .unwrap_or(z_newton);

        let physical = roots.iter().filter(|&&r| r > b_dim).count();
        if physical > 1 {
            warn!(
                roots = ?roots,
                selected = z,
                "cubic has several real roots above the co-volume; keeping the one closest to ideal gas"
            );
        }

        let molar_volume = z * rt / p_pa;
        if !molar_volume.is_finite() || molar_volume <= 0.0 || molar_volume <= b_mix {
            return Err(EosError::NonPhysicalRoot { molar_volume });
        }

        debug!(z, molar_volume, iterations, real_roots = roots.len(), "molar volume solved");
        Ok(CubicSolution {
            molar_volume,
            z,
            iterations,
            real_roots: roots.len(),
        })
    }

    /// Newton iteration with backtracking, from Z = 1.
    fn newton(&self, [c2, c1, c0]: [f64; 3]) -> EosResult<(f64, usize)> {
        let f = |z: f64| ((z + c2) * z + c1) * z + c0;
        let df = |z: f64| (3.0 * z + 2.0 * c2) * z + c1;

        let mut z = 1.0;
        let mut r = f(z);

        for iter in 0..self.config.max_iterations {
            if r.abs() < self.config.abs_tol {
                return Ok((z, iter));
            }

            let slope = df(z);
            if slope == 0.0 || !slope.is_finite() {
                return Err(EosError::NonConvergent {
                    iterations: iter,
                    residual: r.abs(),
                });
            }
            let dz = -r / slope;

            // NaN residuals never count as descent.
            let descends = |r_new: f64| r_new.abs() < r.abs();
            let mut alpha = 1.0;
            let mut z_new = z + dz;
            let mut r_new = f(z_new);
            let mut backtracks = 0;
            while !descends(r_new) && backtracks < self.config.max_line_search_iters {
                alpha *= self.config.line_search_beta;
                z_new = z + alpha * dz;
                r_new = f(z_new);
                backtracks += 1;
            }

            if !descends(r_new) {
                return Err(EosError::NonConvergent {
                    iterations: iter + 1,
                    residual: r.abs(),
                });
            }

            trace!(iter, z = z_new, residual = r_new, alpha, "newton step");
            z = z_new;
            r = r_new;
        }

        if r.abs() < self.config.abs_tol {
            return Ok((z, self.config.max_iterations));
        }
        Err(EosError::NonConvergent {
            iterations: self.config.max_iterations,
            residual: r.abs(),
        })
    }
}

/// All distinct real roots, given one root `z1` of the monic cubic.
fn real_roots([c2, c1, _c0]: [f64; 3], z1: f64) -> Vec<f64> {
    // z² + p·z + q from synthetic division by (z - z1)
    let p = c2 + z1;
    let q = c1 + z1 * p;
    let disc = p * p - 4.0 * q;

    let mut roots = vec![z1];
    if disc >= 0.0 {
        let sqrt_disc = disc.sqrt();
        // Stable form: avoid cancellation between -p and √disc.
        let t = -0.5 * (p + p.signum() * sqrt_disc);
        let candidates = if t != 0.0 { [t, q / t] } else { [0.0, -p] };
        for r in candidates {
            if r.is_finite() && roots.iter().all(|x| (x - r).abs() > 1e-12) {
                roots.push(r);
            }
        }
    }
    roots.sort_by(f64::total_cmp);
    roots
}

/// Molar volume with Van der Waals and the default configuration.
pub fn solve_molar_volume(p_pa: f64, t_k: f64, a_mix: f64, b_mix: f64) -> EosResult<f64> {
    CubicSolver::new(CubicForm::VAN_DER_WAALS, SolverConfig::default())
        .solve_molar_volume(p_pa, t_k, a_mix, b_mix)
}
