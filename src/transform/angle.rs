//! Textual angle parsing.
//!
//! Accepts a numeric literal with an optional unit suffix (`45deg`, `0.25turn`,
//! `100grad`, `1.5rad`). A bare number is taken as radians.

use std::f64::consts::{PI, TAU};

use crate::foundation::error::{PlacementError, PlacementResult};

/// Unit suffix understood by [`parse_angle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    /// Radians (`rad`, or no suffix).
    Rad,
    /// Degrees (`deg`).
    Deg,
    /// Gradians (`grad`), 400 per turn.
    Grad,
    /// Full turns (`turn`).
    Turn,
}

impl AngleUnit {
    // Longest suffix first so `grad` is never read as `rad`.
    const SUFFIXES: [(&'static str, AngleUnit); 4] = [
        ("grad", AngleUnit::Grad),
        ("turn", AngleUnit::Turn),
        ("deg", AngleUnit::Deg),
        ("rad", AngleUnit::Rad),
    ];

    /// Convert `v` expressed in this unit to radians.
    pub fn to_radians(self, v: f64) -> f64 {
        match self {
            Self::Rad => v,
            Self::Deg => v.to_radians(),
            Self::Grad => v * (PI / 200.0),
            Self::Turn => v * TAU,
        }
    }
}

/// Parse a textual angle into radians.
pub fn parse_angle(input: &str) -> PlacementResult<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Err(PlacementError::angle("angle must be non-empty"));
    }

    let lower = s.to_ascii_lowercase();
    let (number, unit) = AngleUnit::SUFFIXES
        .iter()
        .find_map(|&(suffix, unit)| lower.strip_suffix(suffix).map(|n| (n, unit)))
        .unwrap_or((lower.as_str(), AngleUnit::Rad));

    let number = number.trim_end();
    if number.is_empty() || !number.starts_with(|c: char| c.is_ascii_digit() || "+-.".contains(c))
    {
        return Err(PlacementError::angle(format!(
            "'{s}' is not a number with an optional unit"
        )));
    }

    let v: f64 = number
        .parse()
        .map_err(|_| PlacementError::angle(format!("invalid angle '{s}'")))?;
    if !v.is_finite() {
        return Err(PlacementError::angle(format!("angle '{s}' is not finite")));
    }
    Ok(unit.to_radians(v))
}

/// A rotation input: radians, or text resolved through [`parse_angle`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Rotation {
    /// Angle in radians.
    Radians(f64),
    /// Angle with a unit suffix, e.g. `"90deg"`.
    Text(String),
}

impl Rotation {
    /// Resolve to radians.
    pub fn to_radians(&self) -> PlacementResult<f64> {
        match self {
            Self::Radians(v) => Ok(*v),
            Self::Text(s) => parse_angle(s),
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Radians(0.0)
    }
}

impl From<f64> for Rotation {
    fn from(v: f64) -> Self {
        Self::Radians(v)
    }
}

impl From<&str> for Rotation {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Rotation {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/angle.rs"]
mod tests;
