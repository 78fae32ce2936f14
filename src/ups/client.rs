//! UPS Rate API client

use async_trait::async_trait;
use url::Url;

use crate::core::Credentials;

use super::entity::Shipment;
use super::error::ClientError;
use super::wire::{RateRequestEnvelope, RateResponse, ResponseEnvelope};

/// Customer integration environment
pub const INTEGRATION_ENDPOINT: &str = "https://wwwcie.ups.com/rest/Rate";

/// Production environment
pub const PRODUCTION_ENDPOINT: &str = "https://onlinetools.ups.com/rest/Rate";

/// Anything that can shop rates for a UPS shipment
#[async_trait]
pub trait RateClient: Send + Sync {
    /// Quote every available service for the shipment in one call
    async fn shop_rates(
        &self,
        credentials: &Credentials,
        shipment: &Shipment,
    ) -> Result<RateResponse, ClientError>;
}

/// HTTP client for the UPS JSON Rate API
pub struct UpsRateClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl UpsRateClient {
    pub fn new(integration_mode: bool) -> Self {
        let endpoint = if integration_mode {
            INTEGRATION_ENDPOINT
        } else {
            PRODUCTION_ENDPOINT
        };
        Self::with_endpoint(Url::parse(endpoint).expect("valid UPS endpoint"))
    }

    /// Client posting to a custom endpoint
    pub fn with_endpoint(endpoint: Url) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RateClient for UpsRateClient {
    async fn shop_rates(
        &self,
        credentials: &Credentials,
        shipment: &Shipment,
    ) -> Result<RateResponse, ClientError> {
        let context = uuid::Uuid::new_v4().to_string();
        let body = RateRequestEnvelope::shop(credentials, shipment, &context);

        tracing::debug!("Shopping UPS rates at {} (context {})", self.endpoint, context);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ClientError::AuthRequired);
        }

        if !status.is_success() {
            return Err(ClientError::Http(status));
        }

        let bytes = response.bytes().await?;
        parse_response(&bytes)
    }
}

/// Parse a Rate API body, turning a fault into an error
pub(crate) fn parse_response(body: &[u8]) -> Result<RateResponse, ClientError> {
    let envelope: ResponseEnvelope =
        serde_json::from_slice(body).map_err(|e| ClientError::Parse(e.to_string()))?;

    if let Some(fault) = envelope.fault {
        return Err(ClientError::Fault(fault.message()));
    }

    envelope
        .rate_response
        .ok_or_else(|| ClientError::Parse("Response has no RateResponse".to_string()))
}
