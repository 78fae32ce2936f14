//! Postal address as stored on shipping profiles and stores

use serde::{Deserialize, Serialize};

/// A postal address in the platform's address model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,

    /// Top-level subdivision (state, province, prefecture)
    pub administrative_area: String,

    /// City
    pub locality: String,

    /// Neighbourhood or suburb within the city
    pub dependent_locality: String,

    pub postal_code: String,

    pub address_line1: String,

    pub address_line2: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

impl Address {
    /// Full name of the addressee, falling back to the organization
    pub fn display_name(&self) -> Option<String> {
        let name = [self.given_name.as_deref(), self.family_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            Some(name)
        } else {
            self.organization.clone().filter(|o| !o.trim().is_empty())
        }
    }
}
