//! UPS rate shopping
//!
//! Maps platform shipments onto the UPS Rate API and the quoted services back
//! onto shipping rates.

pub mod client;
pub mod entity;
mod error;
pub mod rate_request;
pub mod service;
pub mod shipment;
pub mod wire;

pub use client::{RateClient, UpsRateClient};
pub use error::{ClientError, RateError};
pub use rate_request::RateRequester;
pub use shipment::ShipmentAdapter;
pub use wire::RateResponse;
