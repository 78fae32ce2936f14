//! JSON bodies of the UPS Rate API

use serde::{Deserialize, Serialize};

use crate::core::Credentials;

use super::entity;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RateRequestEnvelope {
    #[serde(rename = "UPSSecurity")]
    ups_security: UpsSecurity,
    rate_request: RateRequestBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct UpsSecurity {
    username_token: UsernameToken,
    service_access_token: ServiceAccessToken,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct UsernameToken {
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ServiceAccessToken {
    access_license_number: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RateRequestBody {
    request: RequestHeader,
    shipment: WireShipment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RequestHeader {
    request_option: &'static str,
    transaction_reference: TransactionReference,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TransactionReference {
    customer_context: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireShipment {
    shipper: Party,
    ship_to: Party,
    ship_from: Party,
    package: Vec<WirePackage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shipment_rating_options: Option<RatingOptions>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Party {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    address: WireAddress,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireAddress {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    address_line: Vec<String>,
    city: String,
    state_province_code: String,
    postal_code: String,
    country_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WirePackage {
    packaging_type: Code,
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<WireDimensions>,
    package_weight: WireWeight,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Code {
    code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireDimensions {
    unit_of_measurement: Code,
    length: String,
    width: String,
    height: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct WireWeight {
    unit_of_measurement: Code,
    weight: String,
}

/// Indicators are flags: present (empty string) means on
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RatingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    negotiated_rates_indicator: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rate_chart_indicator: Option<&'static str>,
}

impl RateRequestEnvelope {
    /// Build a "Shop" request, which quotes every available service at once
    pub(crate) fn shop(
        credentials: &Credentials,
        shipment: &entity::Shipment,
        customer_context: impl Into<String>,
    ) -> Self {
        let shipper = Party::from_ship_from(&shipment.ship_from);
        Self {
            ups_security: UpsSecurity {
                username_token: UsernameToken {
                    username: credentials.user_id.clone(),
                    password: credentials.password.clone(),
                },
                service_access_token: ServiceAccessToken {
                    access_license_number: credentials.access_key.clone(),
                },
            },
            rate_request: RateRequestBody {
                request: RequestHeader {
                    request_option: "Shop",
                    transaction_reference: TransactionReference {
                        customer_context: customer_context.into(),
                    },
                },
                shipment: WireShipment {
                    shipper,
                    ship_to: Party {
                        name: shipment.ship_to.name.clone(),
                        address: WireAddress::from(&shipment.ship_to.address),
                    },
                    ship_from: Party::from_ship_from(&shipment.ship_from),
                    package: shipment.packages.iter().map(WirePackage::from).collect(),
                    shipment_rating_options: shipment.rate_information.map(|info| RatingOptions {
                        negotiated_rates_indicator: info.negotiated_rates_indicator.then_some(""),
                        rate_chart_indicator: info.rate_chart_indicator.then_some(""),
                    }),
                },
            },
        }
    }
}

impl Party {
    fn from_ship_from(ship_from: &entity::ShipFrom) -> Self {
        Self {
            name: ship_from.name.clone(),
            address: WireAddress::from(&ship_from.address),
        }
    }
}

impl From<&entity::Address> for WireAddress {
    fn from(address: &entity::Address) -> Self {
        Self {
            address_line: address.address_lines(),
            city: address.city.clone(),
            state_province_code: address.state_province_code.clone(),
            postal_code: address.postal_code.clone(),
            country_code: address.country_code.clone(),
        }
    }
}

impl From<&entity::Package> for WirePackage {
    fn from(package: &entity::Package) -> Self {
        Self {
            packaging_type: Code {
                code: package.packaging_type.code.clone(),
            },
            dimensions: package.dimensions.as_ref().map(|d| WireDimensions {
                unit_of_measurement: Code {
                    code: d.unit_of_measurement.code.clone(),
                },
                length: d.length.to_string(),
                width: d.width.to_string(),
                height: d.height.to_string(),
            }),
            package_weight: WireWeight {
                unit_of_measurement: Code {
                    code: package.package_weight.unit_of_measurement.code.clone(),
                },
                weight: package.package_weight.weight.to_string(),
            },
        }
    }
}

// --- Response Types ---

/// UPS returns a bare object where a list has one element
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    #[serde(rename = "RateResponse")]
    pub rate_response: Option<RateResponse>,
    #[serde(rename = "Fault")]
    pub fault: Option<Fault>,
}

/// Rate API response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateResponse {
    #[serde(default)]
    pub rated_shipment: Option<OneOrMany<RatedShipment>>,
}

impl RateResponse {
    /// Rated shipments in the order UPS returned them
    pub fn rated_shipments(&self) -> Vec<&RatedShipment> {
        match &self.rated_shipment {
            Some(OneOrMany::One(item)) => vec![item],
            Some(OneOrMany::Many(items)) => items.iter().collect(),
            None => Vec::new(),
        }
    }
}

/// A quote for one service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatedShipment {
    pub service: Service,
    pub total_charges: Charges,
    #[serde(default)]
    pub negotiated_rate_charges: Option<NegotiatedRateCharges>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Service {
    /// Display name: catalog name, then UPS's description, then the bare code
    pub fn name(&self) -> String {
        if let Some(name) = super::service::service_name(&self.code) {
            return name.to_string();
        }
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.code)
            .to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Charges {
    pub currency_code: String,
    pub monetary_value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NegotiatedRateCharges {
    pub total_charge: Charges,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Fault {
    #[serde(default)]
    faultstring: Option<String>,
    #[serde(default)]
    detail: Option<FaultDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FaultDetail {
    #[serde(default)]
    errors: Option<FaultErrors>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FaultErrors {
    #[serde(default)]
    error_detail: OneOrMany<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorDetail {
    #[serde(default)]
    primary_error_code: Option<ErrorCode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorCode {
    code: String,
    #[serde(default)]
    description: String,
}

impl Fault {
    /// First error's code and description, or the generic fault string
    pub(crate) fn message(self) -> String {
        let first = self
            .detail
            .and_then(|d| d.errors)
            .and_then(|e| e.error_detail.into_vec().into_iter().next())
            .and_then(|d| d.primary_error_code);

        match (first, self.faultstring) {
            (Some(code), _) => format!("{} ({})", code.description, code.code),
            (None, Some(s)) => s,
            (None, None) => "unknown fault".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ups::entity::{
        Address, Dimensions, Package, PackageWeight, PackagingType, RateInformation, ShipFrom,
        ShipTo, Shipment, UnitOfMeasurement,
    };
    use serde_json::json;

    fn sample_shipment() -> Shipment {
        let address = |city: &str| Address {
            address_line1: "1 Main St".into(),
            address_line2: String::new(),
            city: city.into(),
            state_province_code: "NY".into(),
            postal_code: "10001".into(),
            country_code: "US".into(),
        };
        Shipment {
            ship_to: ShipTo {
                name: Some("Jane Doe".into()),
                address: address("New York"),
            },
            ship_from: ShipFrom {
                name: None,
                address: address("Chelsea"),
            },
            packages: vec![Package {
                packaging_type: PackagingType::new("02"),
                dimensions: Some(Dimensions {
                    length: 10,
                    width: 8,
                    height: 4,
                    unit_of_measurement: UnitOfMeasurement::new("IN"),
                }),
                package_weight: PackageWeight {
                    weight: 2.5,
                    unit_of_measurement: UnitOfMeasurement::new("LBS"),
                },
            }],
            rate_information: None,
        }
    }

    #[test]
    fn test_shop_request_body() {
        let creds = Credentials::new("KEY", "user", "pass");
        let body = serde_json::to_value(RateRequestEnvelope::shop(&creds, &sample_shipment(), "ctx")).unwrap();

        assert_eq!(
            body["UPSSecurity"],
            json!({
                "UsernameToken": {"Username": "user", "Password": "pass"},
                "ServiceAccessToken": {"AccessLicenseNumber": "KEY"}
            })
        );

        let request = &body["RateRequest"];
        assert_eq!(request["Request"]["RequestOption"], "Shop");
        assert_eq!(request["Request"]["TransactionReference"]["CustomerContext"], "ctx");

        let shipment = &request["Shipment"];
        assert_eq!(shipment["ShipTo"]["Name"], "Jane Doe");
        assert_eq!(shipment["ShipTo"]["Address"]["AddressLine"], json!(["1 Main St"]));
        assert_eq!(shipment["Shipper"]["Address"]["City"], "Chelsea");
        assert!(shipment["ShipFrom"].get("Name").is_none());
        assert_eq!(
            shipment["Package"][0],
            json!({
                "PackagingType": {"Code": "02"},
                "Dimensions": {
                    "UnitOfMeasurement": {"Code": "IN"},
                    "Length": "10",
                    "Width": "8",
                    "Height": "4"
                },
                "PackageWeight": {"UnitOfMeasurement": {"Code": "LBS"}, "Weight": "2.5"}
            })
        );
        assert!(shipment.get("ShipmentRatingOptions").is_none());
    }

    #[test]
    fn test_negotiated_rates_indicator() {
        let creds = Credentials::new("KEY", "user", "pass");
        let mut shipment = sample_shipment();
        shipment.rate_information = Some(RateInformation {
            negotiated_rates_indicator: true,
            rate_chart_indicator: false,
        });
        let body = serde_json::to_value(RateRequestEnvelope::shop(&creds, &shipment, "ctx")).unwrap();
        assert_eq!(
            body["RateRequest"]["Shipment"]["ShipmentRatingOptions"],
            json!({"NegotiatedRatesIndicator": ""})
        );
    }

    #[test]
    fn test_parse_rated_shipment_list() {
        let json = r#"{"RateResponse": {
            "Response": {"ResponseStatus": {"Code": "1", "Description": "Success"}},
            "RatedShipment": [
                {"Service": {"Code": "03", "Description": ""},
                 "TotalCharges": {"CurrencyCode": "USD", "MonetaryValue": "12.34"}},
                {"Service": {"Code": "02"},
                 "TotalCharges": {"CurrencyCode": "USD", "MonetaryValue": "25.00"},
                 "NegotiatedRateCharges": {"TotalCharge": {"CurrencyCode": "USD", "MonetaryValue": "20.00"}}}
            ]
        }}"#;
        let envelope: ResponseEnvelope = serde_json::from_str(json).unwrap();
        let response = envelope.rate_response.unwrap();
        let rated = response.rated_shipments();
        assert_eq!(rated.len(), 2);
        assert_eq!(rated[0].service.code, "03");
        assert_eq!(rated[0].total_charges.monetary_value, "12.34");
        assert_eq!(
            rated[1].negotiated_rate_charges.as_ref().unwrap().total_charge.monetary_value,
            "20.00"
        );
    }

    #[test]
    fn test_parse_single_rated_shipment() {
        let json = r#"{"RateResponse": {"RatedShipment":
            {"Service": {"Code": "01"}, "TotalCharges": {"CurrencyCode": "CAD", "MonetaryValue": "40.10"}}
        }}"#;
        let envelope: ResponseEnvelope = serde_json::from_str(json).unwrap();
        let response = envelope.rate_response.unwrap();
        assert_eq!(response.rated_shipments().len(), 1);
        assert_eq!(response.rated_shipments()[0].total_charges.currency_code, "CAD");
    }

    #[test]
    fn test_missing_rated_shipment() {
        let envelope: ResponseEnvelope = serde_json::from_str(r#"{"RateResponse": {}}"#).unwrap();
        assert!(envelope.rate_response.unwrap().rated_shipments().is_empty());
    }

    #[test]
    fn test_fault_message() {
        let json = r#"{"Fault": {
            "faultcode": "Client",
            "faultstring": "An exception has been raised as a result of client data.",
            "detail": {"Errors": {"ErrorDetail": {
                "Severity": "Hard",
                "PrimaryErrorCode": {"Code": "250003", "Description": "Invalid Access License number"}
            }}}
        }}"#;
        let envelope: ResponseEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.fault.unwrap().message(),
            "Invalid Access License number (250003)"
        );

        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"Fault": {"faultstring": "Bad"}}"#).unwrap();
        assert_eq!(envelope.fault.unwrap().message(), "Bad");
    }

    #[test]
    fn test_service_name_fallbacks() {
        let service = Service { code: "03".into(), description: Some("".into()) };
        assert_eq!(service.name(), "UPS Ground");

        let service = Service { code: "X1".into(), description: Some("Special".into()) };
        assert_eq!(service.name(), "Special");

        let service = Service { code: "X2".into(), description: None };
        assert_eq!(service.name(), "X2");
    }
}
