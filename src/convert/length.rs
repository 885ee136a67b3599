//! Length conversion between metres, feet and inches

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A length unit and its size relative to one metre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Meter,
    Foot,
    Inch,
}

impl Unit {
    /// How many of this unit make one metre.
    pub fn per_meter(self) -> f64 {
        match self {
            Unit::Meter => 1.0,
            Unit::Foot => 3.28,
            Unit::Inch => 39.37,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::Foot => "ft",
            Unit::Inch => "in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit '{0}' (expected m, ft or in)")]
pub struct UnitParseError(pub String);

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "m" => Ok(Unit::Meter),
            "ft" => Ok(Unit::Foot),
            "in" => Ok(Unit::Inch),
            other => Err(UnitParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert `length` from one unit to another, rounded to two decimals.
pub fn convert_length(length: f64, from: Unit, to: Unit) -> f64 {
    let converted = length / from.per_meter() * to.per_meter();
    (converted * 100.0).round() / 100.0
}
