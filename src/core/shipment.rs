//! Platform shipment model - the read-only view the rate request is built from

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Address, Length, Weight};

/// Errors raised when a shipment is missing data needed for a carrier request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShipmentError {
    #[error("Shipment has no shipping address")]
    MissingShippingAddress,

    #[error("Shipment order has no store address")]
    MissingStoreAddress,

    #[error("Shipment has no package type")]
    MissingPackageType,

    #[error("Shipment has no weight")]
    MissingWeight,
}

/// A package type: outer dimensions plus the carrier's code for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageType {
    pub id: String,

    pub label: String,

    /// Carrier packaging code, or "custom" for merchant-defined boxes
    #[serde(default)]
    pub remote_id: Option<String>,

    pub length: Length,

    pub width: Length,

    pub height: Length,

    /// Empty weight of the packaging itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

/// A shipment on an order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Address from the customer's shipping profile
    #[serde(default)]
    pub shipping_address: Option<Address>,

    /// Address of the store the order was placed with
    #[serde(default)]
    pub store_address: Option<Address>,

    #[serde(default)]
    pub package_type: Option<PackageType>,

    /// Total weight of the shipment
    #[serde(default)]
    pub weight: Option<Weight>,
}

impl Shipment {
    pub fn shipping_address(&self) -> Result<&Address, ShipmentError> {
        self.shipping_address
            .as_ref()
            .ok_or(ShipmentError::MissingShippingAddress)
    }

    pub fn store_address(&self) -> Result<&Address, ShipmentError> {
        self.store_address
            .as_ref()
            .ok_or(ShipmentError::MissingStoreAddress)
    }

    pub fn package_type(&self) -> Result<&PackageType, ShipmentError> {
        self.package_type
            .as_ref()
            .ok_or(ShipmentError::MissingPackageType)
    }

    pub fn weight(&self) -> Result<Weight, ShipmentError> {
        self.weight.ok_or(ShipmentError::MissingWeight)
    }
}
