//! Per-country unit converter.
//!
//! Length and weight go through a base unit (meter, kilogram) using the
//! coefficients in [`table`]; temperature uses the Celsius/Fahrenheit
//! formulas. Every selector is validated up front, so an unknown category,
//! country or unit is reported as an error instead of producing NaN.
//!
//! # Example
//!
//! ```
//! use toolhub_core::convert::{convert, Category, Country};
//!
//! let feet = convert(Category::Length, Country::Us, "meter", "feet", 1.0).unwrap();
//! assert_eq!(feet, 3.2808);
//! ```

pub mod table;
pub mod temperature;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use table::{unit_set, UnitSet};
use temperature::{convert_temperature, TemperatureUnit};

/// Decimal places kept for length and weight results.
pub const SCALED_PRECISION: usize = 4;

/// Decimal places shown for temperature results.
pub const TEMPERATURE_PRECISION: usize = 2;

/// Errors raised by the converter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("Unknown country: {0:?}")]
    UnknownCountry(String),

    #[error("Unit {unit:?} not found for {category} in {country}")]
    UnknownUnit {
        unit: String,
        category: Category,
        country: Country,
    },

    #[error("Value must be a finite number, got {0}")]
    InvalidValue(f64),

    #[error("Converting {0} gives a result too large to represent")]
    OutOfRange(f64),
}

/// Quantity being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }

    /// Decimal places used when displaying a result.
    pub fn precision(self) -> usize {
        match self {
            Category::Temperature => TEMPERATURE_PRECISION,
            _ => SCALED_PRECISION,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}

/// Country whose customary units are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    Us,
    In,
    Ca,
    Au,
}

impl Country {
    pub const ALL: [Country; 4] = [Country::Us, Country::In, Country::Ca, Country::Au];

    /// Two-letter country code.
    pub fn code(self) -> &'static str {
        match self {
            Country::Us => "US",
            Country::In => "IN",
            Country::Ca => "CA",
            Country::Au => "AU",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Country::Us => "United States",
            Country::In => "India",
            Country::Ca => "Canada",
            Country::Au => "Australia",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Country::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ConvertError::UnknownCountry(s.to_string()))
    }
}

/// A completed conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub category: Category,
    pub country: Country,
    pub from_unit: String,
    pub to_unit: String,
    pub from_value: f64,
    pub to_value: f64,
}

impl Conversion {
    /// Result as display text: 4 decimals for length and weight, 2 for
    /// temperature.
    pub fn formatted(&self) -> String {
        format!("{:.*}", self.category.precision(), self.to_value)
    }
}

/// Units offered for a category in a country, in display order.
pub fn units(category: Category, country: Country) -> Vec<&'static str> {
    unit_set(category, country).names()
}

/// Convert `value` from one unit to another.
///
/// Length and weight results are rounded to 4 decimal places. Temperature
/// results are returned unrounded.
///
/// # Errors
///
/// `UnknownUnit` if either unit is not offered for the category in that
/// country (for temperature, anything other than celsius/fahrenheit).
/// `InvalidValue` if `value` is NaN or infinite. `OutOfRange` if the
/// result would not fit in an `f64`.
pub fn convert(
    category: Category,
    country: Country,
    from: &str,
    to: &str,
    value: f64,
) -> Result<f64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::InvalidValue(value));
    }

    let unknown = |unit: &str| ConvertError::UnknownUnit {
        unit: unit.to_string(),
        category,
        country,
    };

    let result = match unit_set(category, country) {
        UnitSet::Temperature => {
            let from_unit = from.parse::<TemperatureUnit>().map_err(|e| unknown(&e.0))?;
            let to_unit = to.parse::<TemperatureUnit>().map_err(|e| unknown(&e.0))?;
            convert_temperature(from_unit, to_unit, value)
        }
        set @ UnitSet::Scaled(_) => {
            let from_coefficient = set.coefficient(from).ok_or_else(|| unknown(from))?;
            let to_coefficient = set.coefficient(to).ok_or_else(|| unknown(to))?;
            let base = value / from_coefficient;
            round_to(base * to_coefficient, SCALED_PRECISION)
        }
    };

    if !result.is_finite() {
        return Err(ConvertError::OutOfRange(value));
    }
    Ok(result)
}

/// Parse the selectors and convert, producing a full [`Conversion`].
pub fn convert_units(
    category: &str,
    country: &str,
    from: &str,
    to: &str,
    value: f64,
) -> Result<Conversion, ConvertError> {
    let category: Category = category.parse()?;
    let country: Country = country.parse()?;

    let to_value = convert(category, country, from, to, value).inspect_err(|e| {
        log::warn!("Conversion rejected: {}", e);
    })?;

    log::debug!(
        "Converted {} {} -> {} {} ({}, {})",
        value,
        from,
        to_value,
        to,
        category,
        country
    );

    Ok(Conversion {
        category,
        country,
        from_unit: from.to_string(),
        to_unit: to.to_string(),
        from_value: value,
        to_value,
    })
}

/// Round to `decimals` places. Values too large to scale have no fractional
/// part left and are returned as is.
fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} within {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    // ===== Selector Tests =====

    #[test]
    fn test_parse_category() {
        assert_eq!("length".parse::<Category>(), Ok(Category::Length));
        assert_eq!("Weight".parse::<Category>(), Ok(Category::Weight));
        assert_eq!(
            "volume".parse::<Category>(),
            Err(ConvertError::UnknownCategory("volume".into()))
        );
    }

    #[test]
    fn test_parse_country() {
        assert_eq!("US".parse::<Country>(), Ok(Country::Us));
        assert_eq!("in".parse::<Country>(), Ok(Country::In));
        assert_eq!(
            "UK".parse::<Country>(),
            Err(ConvertError::UnknownCountry("UK".into()))
        );
    }

    #[test]
    fn test_country_names() {
        let names: Vec<_> = Country::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["United States", "India", "Canada", "Australia"]);
    }

    // ===== Scaled Conversion Tests =====

    #[test]
    fn test_meter_to_feet_us() {
        let result = convert(Category::Length, Country::Us, "meter", "feet", 1.0).unwrap();
        approx(result, 3.2808, 0.0001);
    }

    #[test]
    fn test_kilogram_to_gram_india() {
        let result = convert(Category::Weight, Country::In, "kilogram", "gram", 2.0).unwrap();
        assert_eq!(result, 2000.0);
    }

    #[test]
    fn test_between_non_base_units() {
        // 12 inch -> meter -> feet
        let result = convert(Category::Length, Country::Ca, "inch", "feet", 12.0).unwrap();
        approx(result, 1.0, 0.0001);
    }

    #[test]
    fn test_same_unit() {
        let result = convert(Category::Weight, Country::Us, "pound", "pound", 7.5).unwrap();
        assert_eq!(result, 7.5);
    }

    #[test]
    fn test_rounds_to_four_decimals() {
        let result = convert(Category::Length, Country::Au, "meter", "mile", 1.0).unwrap();
        assert_eq!(result, 0.0006);
    }

    #[test]
    fn test_unit_from_other_country_rejected() {
        let result = convert(Category::Length, Country::Us, "meter", "centimeter", 1.0);
        assert_eq!(
            result,
            Err(ConvertError::UnknownUnit {
                unit: "centimeter".into(),
                category: Category::Length,
                country: Country::Us,
            })
        );
    }

    #[test]
    fn test_unit_from_other_category_rejected() {
        let result = convert(Category::Weight, Country::In, "meter", "gram", 1.0);
        assert!(matches!(result, Err(ConvertError::UnknownUnit { ref unit, .. }) if unit == "meter"));
    }

    // ===== Temperature Tests =====

    #[test]
    fn test_celsius_fahrenheit_round_trip() {
        for x in [-40.0, 0.0, 37.0, 100.0] {
            let f = convert(Category::Temperature, Country::Us, "celsius", "fahrenheit", x).unwrap();
            let c = convert(Category::Temperature, Country::Us, "fahrenheit", "celsius", f).unwrap();
            approx(c, x, 0.01);
        }
    }

    #[test]
    fn test_body_temperature() {
        let f = convert(Category::Temperature, Country::Au, "celsius", "fahrenheit", 37.0).unwrap();
        approx(f, 98.6, 1e-9);
    }

    #[test]
    fn test_temperature_same_unit() {
        let result = convert(Category::Temperature, Country::In, "celsius", "celsius", 21.0);
        assert_eq!(result, Ok(21.0));
    }

    #[test]
    fn test_kelvin_is_rejected() {
        let result = convert(Category::Temperature, Country::Us, "kelvin", "celsius", 300.0);
        assert_eq!(
            result,
            Err(ConvertError::UnknownUnit {
                unit: "kelvin".into(),
                category: Category::Temperature,
                country: Country::Us,
            })
        );
    }

    // ===== Input Validation Tests =====

    #[test]
    fn test_non_finite_value_rejected() {
        let result = convert(Category::Length, Country::Us, "meter", "feet", f64::NAN);
        assert!(matches!(result, Err(ConvertError::InvalidValue(_))));

        let result = convert(Category::Weight, Country::Us, "kilogram", "pound", f64::INFINITY);
        assert!(matches!(result, Err(ConvertError::InvalidValue(_))));
    }

    #[test]
    fn test_large_finite_result_is_kept() {
        let result = convert(Category::Length, Country::Us, "meter", "feet", 1e305).unwrap();
        assert!(result.is_finite());
        approx(result / 1e305, 3.28084, 1e-12);

        let record = convert_units("length", "US", "meter", "feet", 1e305).unwrap();
        assert!(!record.formatted().contains("inf"));
    }

    #[test]
    fn test_overflowing_scaled_result_rejected() {
        let result = convert(Category::Length, Country::In, "meter", "centimeter", 1e307);
        assert_eq!(result, Err(ConvertError::OutOfRange(1e307)));

        let result = convert(Category::Length, Country::Au, "mile", "meter", -1e308);
        assert_eq!(result, Err(ConvertError::OutOfRange(-1e308)));
    }

    #[test]
    fn test_overflowing_temperature_rejected() {
        let result = convert(Category::Temperature, Country::Us, "celsius", "fahrenheit", 1.5e308);
        assert_eq!(result, Err(ConvertError::OutOfRange(1.5e308)));

        let record = convert_units("temperature", "US", "celsius", "fahrenheit", 1.5e308);
        assert!(matches!(record, Err(ConvertError::OutOfRange(_))));
    }

    #[test]
    fn test_large_temperature_stays_finite() {
        // 9e307 * 9 would overflow before the division by 5
        let f = convert(Category::Temperature, Country::Us, "celsius", "fahrenheit", 9e307).unwrap();
        approx(f / 1.62e308, 1.0, 1e-12);
    }

    #[test]
    fn test_error_message() {
        let err = convert(Category::Weight, Country::Us, "kilogram", "gram", 1.0).unwrap_err();
        assert_eq!(err.to_string(), "Unit \"gram\" not found for weight in US");
    }

    // ===== Conversion Record Tests =====

    #[test]
    fn test_convert_units_record() {
        let record = convert_units("length", "US", "meter", "feet", 1.0).unwrap();
        assert_eq!(record.category, Category::Length);
        assert_eq!(record.country, Country::Us);
        assert_eq!(record.from_unit, "meter");
        assert_eq!(record.to_unit, "feet");
        assert_eq!(record.from_value, 1.0);
        assert_eq!(record.formatted(), "3.2808");
    }

    #[test]
    fn test_formatted_precision() {
        let weight = convert_units("weight", "IN", "kilogram", "gram", 2.0).unwrap();
        assert_eq!(weight.formatted(), "2000.0000");

        let temp = convert_units("temperature", "CA", "fahrenheit", "celsius", 100.0).unwrap();
        assert_eq!(temp.formatted(), "37.78");
    }

    #[test]
    fn test_convert_units_unknown_selectors() {
        assert!(matches!(
            convert_units("speed", "US", "a", "b", 1.0),
            Err(ConvertError::UnknownCategory(_))
        ));
        assert!(matches!(
            convert_units("length", "FR", "meter", "feet", 1.0),
            Err(ConvertError::UnknownCountry(_))
        ));
    }

    #[test]
    fn test_units_listing() {
        assert_eq!(
            units(Category::Weight, Country::Us),
            vec!["kilogram", "pound", "ounce"]
        );
        for country in Country::ALL {
            assert_eq!(units(Category::Length, country)[0], "meter");
            assert_eq!(units(Category::Weight, country)[0], "kilogram");
            assert_eq!(units(Category::Temperature, country), vec!["celsius", "fahrenheit"]);
        }
    }
}
