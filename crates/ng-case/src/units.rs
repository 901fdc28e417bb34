//! Unit-aware numeric input.
//!
//! User text such as `"50 bar"`, `"15 C"` or `"3%"` is turned into a
//! canonical SI value. A bare number is taken as already SI.

use ng_core::constants::ATM_PA;
use serde::{Deserialize, Serialize};
use std::fmt;

const PSI_PA: f64 = 6_894.76;
const ATM_PSI: f64 = 14.696;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: Kelvin)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Mole fraction (canonical: 0-1)
    Fraction,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::Fraction => write!(f, "Mole Fraction"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Unit not recognized for this quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { unit: String, quantity: Quantity },

    /// Unit not allowed because its meaning is unclear (plain "psi")
    #[error("Ambiguous unit '{unit}': {reason}")]
    AmbiguousUnit { unit: String, reason: &'static str },

    /// Value out of physical range
    #[error("Value {value} out of range: {reason}")]
    OutOfRange { value: f64, reason: &'static str },
}

/// A value as written in a case file: either a bare SI number or unit text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Si(f64),
    Text(String),
}

impl QuantityInput {
    pub fn to_si(&self, quantity: Quantity) -> Result<f64, UnitError> {
        match self {
            Self::Si(value) => check_range(*value, quantity),
            Self::Text(text) => parse_quantity(text, quantity),
        }
    }
}

impl fmt::Display for QuantityInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Si(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for QuantityInput {
    fn from(value: f64) -> Self {
        Self::Si(value)
    }
}

impl From<&str> for QuantityInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Parse a quantity value from user input text into canonical SI units.
///
/// - Temperature: K (default), C, F, R
/// - Pressure: Pa (default), kPa, MPa, bar, mbar, atm, torr, psia, psig, barg, kPag, MPag
/// - Fraction: plain number or percent
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::Fraction => parse_fraction(trimmed),
    }
}

/// Parse temperature in various units, return Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "" | "k" | "kelvin" => value,
        "c" | "°c" | "degc" | "celsius" => value + 273.15,
        "f" | "°f" | "degf" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Temperature,
            });
        }
    };

    check_range(kelvin, Quantity::Temperature)
}

/// Parse pressure in various units, return Pa (absolute).
///
/// Gauge units assume a standard atmosphere as reference.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa = match unit.to_lowercase().as_str() {
        "" | "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" | "bara" => value * 1e5,
        "mbar" | "millibar" => value * 100.0,
        "atm" => value * ATM_PA,
        "torr" => value * 133.322,
        "psia" => value * PSI_PA,
        "psig" => (value + ATM_PSI) * PSI_PA,
        "barg" => value * 1e5 + ATM_PA,
        "kpag" => value * 1e3 + ATM_PA,
        "mpag" => value * 1e6 + ATM_PA,
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "use 'psia' (absolute) or 'psig' (gauge)",
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit,
                quantity: Quantity::Pressure,
            });
        }
    };

    check_range(pa, Quantity::Pressure)
}

/// Parse a mole fraction, accepting plain numbers or percent.
fn parse_fraction(input: &str) -> Result<f64, UnitError> {
    let parse_err = || UnitError::ParseError(format!("could not parse fraction from '{input}'"));

    let value = match input.strip_suffix('%') {
        Some(num) => num.trim().parse::<f64>().map_err(|_| parse_err())? / 100.0,
        None => input.parse::<f64>().map_err(|_| parse_err())?,
    };

    check_range(value, Quantity::Fraction)
}

/// Physical range of a canonical value.
fn check_range(value: f64, quantity: Quantity) -> Result<f64, UnitError> {
    let (ok, reason) = match quantity {
        Quantity::Temperature => (value.is_finite() && value > 0.0, "absolute temperature must be > 0 K"),
        Quantity::Pressure => (value.is_finite() && value > 0.0, "absolute pressure must be > 0 Pa"),
        Quantity::Fraction => ((0.0..=1.0).contains(&value), "mole fraction must be between 0 and 1"),
    };
    if ok {
        Ok(value)
    } else {
        Err(UnitError::OutOfRange { value, reason })
    }
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// - "70F" -> (70.0, "F")
/// - "14.7 psia" -> (14.7, "psia")
/// - "1e5" -> (100000.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    let mut split_idx = trimmed.len();
    for (idx, c) in trimmed.char_indices() {
        let exponent = (c == 'e' || c == 'E')
            && trimmed[idx + 1..]
                .chars()
                .next()
                .is_some_and(|n| n.is_ascii_digit() || n == '-' || n == '+');
        if !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || exponent) {
            split_idx = idx;
            break;
        }
    }

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let value: f64 = num_part
        .trim()
        .parse()
        .map_err(|_| UnitError::ParseError(format!("could not parse numeric value from '{input}'")))?;

    Ok((value, unit_part.trim().to_string()))
}
