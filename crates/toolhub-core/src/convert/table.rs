//! Static per-country unit table.
//!
//! Coefficients are "units per base unit": 1 meter is 3.28084 feet, so
//! `feet = 3.28084`. The base unit (meter, kilogram) is always 1.

use super::{Category, Country};

/// Units offered for one (category, country) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitSet {
    /// Linear units: name and coefficient relative to the base unit, in
    /// display order.
    Scaled(&'static [(&'static str, f64)]),
    /// Temperature scales, converted by formula.
    Temperature,
}

/// Temperature units, in display order.
pub const TEMPERATURE_UNITS: [&str; 2] = ["celsius", "fahrenheit"];

const LENGTH_US: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("feet", 3.28084),
    ("inch", 39.3701),
    ("yard", 1.09361),
];

const LENGTH_IN: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("feet", 3.28084),
    ("inch", 39.3701),
    ("centimeter", 100.0),
];

const LENGTH_CA: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("feet", 3.28084),
    ("inch", 39.3701),
    ("kilometer", 0.001),
];

const LENGTH_AU: &[(&str, f64)] = &[
    ("meter", 1.0),
    ("feet", 3.28084),
    ("inch", 39.3701),
    ("mile", 0.000621371),
];

const WEIGHT_US: &[(&str, f64)] = &[("kilogram", 1.0), ("pound", 2.20462), ("ounce", 35.274)];

const WEIGHT_METRIC: &[(&str, f64)] = &[("kilogram", 1.0), ("pound", 2.20462), ("gram", 1000.0)];

/// Look up the unit set for a category in a country.
pub fn unit_set(category: Category, country: Country) -> UnitSet {
    match (category, country) {
        (Category::Length, Country::Us) => UnitSet::Scaled(LENGTH_US),
        (Category::Length, Country::In) => UnitSet::Scaled(LENGTH_IN),
        (Category::Length, Country::Ca) => UnitSet::Scaled(LENGTH_CA),
        (Category::Length, Country::Au) => UnitSet::Scaled(LENGTH_AU),
        (Category::Weight, Country::Us) => UnitSet::Scaled(WEIGHT_US),
        (Category::Weight, Country::In | Country::Ca | Country::Au) => {
            UnitSet::Scaled(WEIGHT_METRIC)
        }
        (Category::Temperature, _) => UnitSet::Temperature,
    }
}

impl UnitSet {
    /// Unit names in display order.
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            UnitSet::Scaled(units) => units.iter().map(|(name, _)| *name).collect(),
            UnitSet::Temperature => TEMPERATURE_UNITS.to_vec(),
        }
    }

    /// Coefficient of a scaled unit. `None` for unknown names and for
    /// temperature.
    pub fn coefficient(&self, unit: &str) -> Option<f64> {
        match self {
            UnitSet::Scaled(units) => units
                .iter()
                .find(|(name, _)| *name == unit)
                .map(|(_, coefficient)| *coefficient),
            UnitSet::Temperature => None,
        }
    }
}
