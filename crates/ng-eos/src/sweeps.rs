//! State-variable sweep generation.
//!
//! A sweep varies pressure or temperature between two bounds while the
//! composition and the other state variable stay fixed.

use crate::error::{EosError, EosResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State variable being swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepVariable {
    Pressure,
    Temperature,
}

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep, bounds in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    variable: SweepVariable,
    start_si: f64,
    end_si: f64,
    num_points: usize,
    sweep_type: SweepType,
}

impl SweepDefinition {
    /// Bounds must be finite, positive and distinct; at least two points.
    pub fn new(
        variable: SweepVariable,
        start_si: f64,
        end_si: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> EosResult<Self> {
        if num_points < 2 {
            return Err(invalid("sweep must have at least 2 points"));
        }
        for (label, value) in [("start", start_si), ("end", end_si)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!(
                    "{label} {variable} must be positive and finite, got {value}"
                )));
            }
        }
        if (start_si - end_si).abs() < 1e-12 {
            return Err(invalid("start and end values must be different"));
        }

        Ok(Self {
            variable,
            start_si,
            end_si,
            num_points,
            sweep_type,
        })
    }

    pub fn variable(&self) -> SweepVariable {
        self.variable
    }

    pub fn start_si(&self) -> f64 {
        self.start_si
    }

    pub fn end_si(&self) -> f64 {
        self.end_si
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        let n = self.num_points;
        let delta = (self.end_si - self.start_si) / (n - 1) as f64;
        let mut points: Vec<f64> = (0..n).map(|i| self.start_si + i as f64 * delta).collect();

        // Ensure exact endpoint
        points[n - 1] = self.end_si;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        let n = self.num_points;
        let log_start = self.start_si.ln();
        let log_delta = (self.end_si.ln() - log_start) / (n - 1) as f64;
        let mut points: Vec<f64> = (0..n)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start_si;
        points[n - 1] = self.end_si;
        points
    }
}

fn invalid(reason: impl Into<String>) -> EosError {
    EosError::InvalidSweep {
        reason: reason.into(),
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressure => write!(f, "pressure"),
            Self::Temperature => write!(f, "temperature"),
        }
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.variable, self.start_si, self.end_si, self.num_points, self.sweep_type
        )
    }
}
