//! Mixture composition by mole fraction.

use crate::error::{EosError, EosResult};
use crate::species::canonical_key;
use std::collections::HashSet;

/// Default allowed deviation of the fraction sum from one.
pub const DEFAULT_SUM_TOLERANCE: f64 = 1e-3;

/// Species names with mole fractions.
///
/// Fractions are taken as given: each must lie in [0, 1] and the total must
/// be within the tolerance of one. Nothing is normalized, so a composition
/// that does not add up is reported instead of rescaled.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    items: Vec<(String, f64)>,
    tolerance: f64,
}

impl Composition {
    /// Single species at mole fraction one.
    pub fn pure(species: impl Into<String>) -> EosResult<Self> {
        Self::new([(species.into(), 1.0)])
    }

    /// Validate fractions against [`DEFAULT_SUM_TOLERANCE`].
    pub fn new<I, S>(fractions: I) -> EosResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::with_tolerance(fractions, DEFAULT_SUM_TOLERANCE)
    }

    pub fn with_tolerance<I, S>(fractions: I, tolerance: f64) -> EosResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(invalid("sum tolerance must be finite and non-negative"));
        }

        let items: Vec<(String, f64)> = fractions
            .into_iter()
            .map(|(name, frac)| (name.into().trim().to_string(), frac))
            .collect();

        if items.is_empty() {
            return Err(invalid("empty composition"));
        }

        let mut seen = HashSet::new();
        let mut sum = 0.0;
        for (name, frac) in &items {
            if name.is_empty() {
                return Err(invalid("empty species name"));
            }
            if !frac.is_finite() {
                return Err(invalid(format!("non-finite mole fraction for '{name}'")));
            }
            if !(0.0..=1.0).contains(frac) {
                return Err(invalid(format!(
                    "mole fraction {frac} for '{name}' is outside [0, 1]"
                )));
            }
            if !seen.insert(canonical_key(name)) {
                return Err(invalid(format!("species '{name}' listed more than once")));
            }
            sum += frac;
        }

        if (sum - 1.0).abs() > tolerance {
            return Err(invalid(format!(
                "mole fractions sum to {sum}, expected 1 ± {tolerance}"
            )));
        }

        Ok(Self { items, tolerance })
    }

    /// Mole fraction of `name` (0.0 if not present). Aliases match.
    pub fn mole_fraction(&self, name: &str) -> f64 {
        let key = canonical_key(name);
        self.items
            .iter()
            .find(|(n, _)| canonical_key(n) == key)
            .map(|(_, f)| *f)
            .unwrap_or(0.0)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(n, f)| (n.as_str(), *f))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed composition; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.items.iter().map(|(_, f)| f).sum()
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Single-entry composition → that species' name.
    pub fn is_pure(&self) -> Option<&str> {
        match self.items.as_slice() {
            [(name, _)] => Some(name.as_str()),
            _ => None,
        }
    }
}

fn invalid(reason: impl Into<String>) -> EosError {
    EosError::InvalidComposition {
        reason: reason.into(),
    }
}
