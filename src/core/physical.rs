//! Physical measurements - lengths and weights with their units

use serde::{Deserialize, Serialize};
use std::fmt;

/// Units a package dimension can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
}

impl LengthUnit {
    /// Size of one unit in meters
    fn meters(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }
}

/// Units a package weight can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "oz")]
    Ounce,
    #[serde(rename = "lb")]
    Pound,
}

impl WeightUnit {
    /// Size of one unit in kilograms
    fn kilograms(self) -> f64 {
        match self {
            WeightUnit::Gram => 0.001,
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Ounce => 0.028_349_523_125,
            WeightUnit::Pound => 0.453_592_37,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Ounce => "oz",
            WeightUnit::Pound => "lb",
        }
    }
}

/// A length measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub number: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(number: f64, unit: LengthUnit) -> Self {
        Self { number, unit }
    }

    /// Convert to another unit
    pub fn convert(&self, unit: LengthUnit) -> Length {
        if unit == self.unit {
            return *self;
        }
        Length::new(self.number * self.unit.meters() / unit.meters(), unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.unit.symbol())
    }
}

/// A weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub number: f64,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn new(number: f64, unit: WeightUnit) -> Self {
        Self { number, unit }
    }

    /// Convert to another unit
    pub fn convert(&self, unit: WeightUnit) -> Weight {
        if unit == self.unit {
            return *self;
        }
        Weight::new(self.number * self.unit.kilograms() / unit.kilograms(), unit)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.unit.symbol())
    }
}
