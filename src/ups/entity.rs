//! UPS shipment entities - the carrier-shaped side of a rate request

use serde::{Deserialize, Serialize};

use super::service::packaging;

/// A UPS unit-of-measurement code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasurement {
    pub code: String,
}

impl UnitOfMeasurement {
    pub const UOM_IN: &'static str = "IN";
    pub const UOM_CM: &'static str = "CM";
    pub const UOM_KGS: &'static str = "KGS";
    pub const UOM_LBS: &'static str = "LBS";

    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Address in UPS's shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state_province_code: String,
    pub postal_code: String,
    pub country_code: String,
}

impl Address {
    /// Non-empty street lines, in order
    pub fn address_lines(&self) -> Vec<String> {
        [&self.address_line1, &self.address_line2]
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipTo {
    pub name: Option<String>,
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipFrom {
    pub name: Option<String>,
    pub address: Address,
}

/// Package dimensions; UPS only accepts whole numbers of at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub unit_of_measurement: UnitOfMeasurement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageWeight {
    pub weight: f64,
    pub unit_of_measurement: UnitOfMeasurement,
}

impl Default for PackageWeight {
    fn default() -> Self {
        Self {
            weight: 0.0,
            unit_of_measurement: UnitOfMeasurement::new(UnitOfMeasurement::UOM_LBS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingType {
    pub code: String,
}

impl PackagingType {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl Default for PackagingType {
    fn default() -> Self {
        Self::new(packaging::UNKNOWN)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub packaging_type: PackagingType,
    pub dimensions: Option<Dimensions>,
    pub package_weight: PackageWeight,
}

/// Which rate tables UPS should quote from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateInformation {
    pub negotiated_rates_indicator: bool,
    pub rate_chart_indicator: bool,
}

/// A shipment as UPS expects it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub ship_to: ShipTo,
    pub ship_from: ShipFrom,
    pub packages: Vec<Package>,
    pub rate_information: Option<RateInformation>,
}

impl Shipment {
    pub fn add_package(&mut self, package: Package) {
        self.packages.push(package);
    }
}
