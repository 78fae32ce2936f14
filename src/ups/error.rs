//! Errors from UPS rate requests

use thiserror::Error;

use crate::core::ShipmentError;

/// Errors from talking to the UPS Rate API
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("UPS rejected the credentials")]
    AuthRequired,

    #[error("UPS API returned {0}")]
    Http(reqwest::StatusCode),

    #[error("UPS fault: {0}")]
    Fault(String),

    #[error("Failed to parse UPS response: {0}")]
    Parse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors producing shipping rates for a shipment
#[derive(Debug, Error)]
pub enum RateError {
    #[error("Cannot build UPS shipment: {0}")]
    Shipment(#[from] ShipmentError),

    #[error("Rate fetch failed: {0}")]
    RateFetchFailed(#[source] ClientError),
}
