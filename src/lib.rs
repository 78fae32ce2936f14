//! commerce-ups - UPS rate shopping for e-commerce shipments
//!
//! Converts a platform shipment into a UPS Rate API "Shop" request and the
//! quoted services back into shipping rates:
//! - `core`: platform models (addresses, measurements, prices, rates)
//! - `settings`: administrator configuration
//! - `ups`: shipment mapping, the rate requester and the HTTP client

pub mod core;
pub mod logging;
pub mod settings;
pub mod ups;
