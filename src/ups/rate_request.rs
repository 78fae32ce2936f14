//! Rate requests - turn a platform shipment into a list of shipping rates

use crate::core::{CredentialStore, Credentials, Price, Shipment, ShippingRate, ShippingService};
use crate::settings::{SettingsError, UpsSettings};

use super::client::{RateClient, UpsRateClient};
use super::entity::{self, RateInformation};
use super::error::RateError;
use super::shipment::ShipmentAdapter;
use super::wire::RateResponse;

/// Fetches UPS rates for shipments using one account's settings
pub struct RateRequester<C> {
    settings: UpsSettings,
    credentials: Credentials,
    client: C,
}

impl RateRequester<UpsRateClient> {
    /// Requester talking to the UPS environment the settings select
    pub fn from_settings(
        settings: UpsSettings,
        store: &dyn CredentialStore,
    ) -> Result<Self, SettingsError> {
        let credentials = settings.credentials(store)?;
        let client = UpsRateClient::new(settings.use_integration_mode());
        Ok(Self::new(settings, credentials, client))
    }
}

impl<C: RateClient> RateRequester<C> {
    pub fn new(settings: UpsSettings, credentials: Credentials, client: C) -> Self {
        Self {
            settings,
            credentials,
            client,
        }
    }

    pub fn auth(&self) -> &Credentials {
        &self.credentials
    }

    pub fn use_integration_mode(&self) -> bool {
        self.settings.use_integration_mode()
    }

    /// Nonzero means negotiated rates
    pub fn rate_type(&self) -> i64 {
        self.settings.rate_type()
    }

    pub fn settings(&self) -> &UpsSettings {
        &self.settings
    }

    /// Build the UPS shipment, asking for negotiated rates when configured
    pub fn build_shipment(&self, shipment: &Shipment) -> Result<entity::Shipment, RateError> {
        let mut ups_shipment = ShipmentAdapter::new(shipment).shipment()?;

        if self.rate_type() != 0 {
            ups_shipment.rate_information = Some(RateInformation {
                negotiated_rates_indicator: true,
                rate_chart_indicator: false,
            });
        }

        Ok(ups_shipment)
    }

    /// Fetch rates for enabled services, in the order UPS returns them
    pub async fn fetch_rates(&self, shipment: &Shipment) -> Result<Vec<ShippingRate>, RateError> {
        let ups_shipment = self.build_shipment(shipment)?;

        let response = self
            .client
            .shop_rates(&self.credentials, &ups_shipment)
            .await
            .map_err(RateError::RateFetchFailed)?;

        Ok(self.map_rates(&response))
    }

    /// Fetch rates, treating any failure as "no rates available"
    pub async fn get_rates(&self, shipment: &Shipment) -> Vec<ShippingRate> {
        match self.fetch_rates(shipment).await {
            Ok(rates) => rates,
            Err(e) => {
                tracing::warn!(
                    shipment = shipment.id.as_deref().unwrap_or("-"),
                    "UPS rate request failed: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    /// Entries with an unreadable charge are skipped; the other services still quote
    fn map_rates(&self, response: &RateResponse) -> Vec<ShippingRate> {
        let mut rates = Vec::new();

        for rated in response.rated_shipments() {
            let service_code = &rated.service.code;

            if !self.settings.is_service_enabled(service_code) {
                tracing::debug!("Skipping disabled UPS service {}", service_code);
                continue;
            }

            let charges = &rated.total_charges;
            let number = match charges.monetary_value.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => {
                    tracing::warn!(
                        "Skipping UPS service {} with invalid charge {:?}",
                        service_code,
                        charges.monetary_value
                    );
                    continue;
                }
            };

            if let Some(negotiated) = &rated.negotiated_rate_charges {
                tracing::debug!(
                    "UPS service {} negotiated total {} {}",
                    service_code,
                    negotiated.total_charge.monetary_value,
                    negotiated.total_charge.currency_code
                );
            }

            let service_name = rated.service.name();
            rates.push(ShippingRate::new(
                service_code.clone(),
                ShippingService::new(&service_name, &service_name),
                Price::new(number, &charges.currency_code),
            ));
        }

        rates
    }
}
