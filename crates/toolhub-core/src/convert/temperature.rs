//! Temperature conversion by formula.

use std::str::FromStr;

use thiserror::Error;

/// Temperature scales the converter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

/// A name that is neither `celsius` nor `fahrenheit`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown temperature unit: {0:?}")]
pub struct UnknownTemperatureUnit(pub String);

impl FromStr for TemperatureUnit {
    type Err = UnknownTemperatureUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "celsius" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(UnknownTemperatureUnit(s.to_string())),
        }
    }
}

/// Convert a temperature between scales. Same scale is the identity.
///
/// Divides before multiplying so a result that fits in an `f64` never
/// overflows on the way.
pub fn convert_temperature(from: TemperatureUnit, to: TemperatureUnit, value: f64) -> f64 {
    match (from, to) {
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (value - 32.0) / 9.0 * 5.0,
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => value / 5.0 * 9.0 + 32.0,
        _ => value,
    }
}
