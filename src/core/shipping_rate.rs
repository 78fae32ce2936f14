//! Shipping rate model - what the platform shows at checkout

use serde::{Deserialize, Serialize};

use super::Price;

/// A shipping service the customer can pick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingService {
    pub id: String,
    pub label: String,
}

impl ShippingService {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A quoted price for one shipping service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRate {
    /// Carrier service code the rate was quoted for
    pub id: String,

    pub service: ShippingService,

    pub amount: Price,
}

impl ShippingRate {
    pub fn new(id: impl Into<String>, service: ShippingService, amount: Price) -> Self {
        Self {
            id: id.into(),
            service,
            amount,
        }
    }
}
