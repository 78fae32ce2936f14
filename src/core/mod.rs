//! Core platform models and credential storage

mod address;
mod credentials;
mod physical;
mod price;
mod shipment;
mod shipping_rate;

pub use address::*;
pub use credentials::*;
pub use physical::*;
pub use price::*;
pub use shipment::*;
pub use shipping_rate::*;

#[cfg(test)]
pub(crate) use credentials::tests::MemoryCredentialStore;
