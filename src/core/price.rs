//! Monetary amounts

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in a specific currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub number: f64,

    /// ISO 4217 currency code (e.g., "USD")
    pub currency_code: String,
}

impl Price {
    pub fn new(number: f64, currency_code: impl Into<String>) -> Self {
        Self {
            number,
            currency_code: currency_code.into(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.number, &self.currency_code))
    }
}

/// Format a value as currency
fn format_currency(value: f64, currency_code: &str) -> String {
    match currency_code.to_uppercase().as_str() {
        "USD" | "CAD" => format!("${:.2}", value),
        "EUR" => format!("€{:.2}", value),
        "GBP" => format!("£{:.2}", value),
        _ => format!("{:.2} {}", value, currency_code),
    }
}
