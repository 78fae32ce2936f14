//! Builds a UPS shipment from a platform shipment

use crate::core::{self, Length, LengthUnit, ShipmentError, WeightUnit};

use super::entity::{
    Address, Dimensions, Package, PackageWeight, PackagingType, ShipFrom, ShipTo, Shipment,
    UnitOfMeasurement,
};
use super::service::packaging;

/// Length unit used when a package type's unit is not accepted by UPS
const FALLBACK_LENGTH_UNIT: LengthUnit = LengthUnit::Inch;

/// Weight unit used when neither the package nor the shipment has one UPS accepts
const FALLBACK_WEIGHT_UNIT: WeightUnit = WeightUnit::Pound;

/// Maps a platform shipment onto UPS's shipment entities
pub struct ShipmentAdapter<'a> {
    shipment: &'a core::Shipment,
    weight_unit_code: String,
}

impl<'a> ShipmentAdapter<'a> {
    pub fn new(shipment: &'a core::Shipment) -> Self {
        Self {
            shipment,
            weight_unit_code: UnitOfMeasurement::UOM_LBS.to_string(),
        }
    }

    /// Weight unit code the outgoing package starts with
    pub fn with_weight_unit_code(mut self, code: impl Into<String>) -> Self {
        self.weight_unit_code = code.into();
        self
    }

    /// Create the UPS shipment
    pub fn shipment(&self) -> Result<Shipment, ShipmentError> {
        let mut ups_shipment = Shipment {
            ship_to: self.ship_to()?,
            ship_from: self.ship_from()?,
            ..Default::default()
        };
        ups_shipment.add_package(self.package()?);
        Ok(ups_shipment)
    }

    pub fn ship_to(&self) -> Result<ShipTo, ShipmentError> {
        let address = self.shipment.shipping_address()?;
        Ok(ShipTo {
            name: address.display_name(),
            address: Address {
                address_line1: address.address_line1.clone(),
                address_line2: address.address_line2.clone(),
                city: address.locality.clone(),
                state_province_code: address.administrative_area.clone(),
                postal_code: address.postal_code.clone(),
                country_code: address.country_code.clone(),
            },
        })
    }

    /// Ship-from takes its city from the store's dependent locality
    pub fn ship_from(&self) -> Result<ShipFrom, ShipmentError> {
        let address = self.shipment.store_address()?;
        Ok(ShipFrom {
            name: address.display_name(),
            address: Address {
                address_line1: address.address_line1.clone(),
                address_line2: address.address_line2.clone(),
                city: address.dependent_locality.clone(),
                state_province_code: address.administrative_area.clone(),
                postal_code: address.postal_code.clone(),
                country_code: address.country_code.clone(),
            },
        })
    }

    pub fn package(&self) -> Result<Package, ShipmentError> {
        let mut package = Package {
            package_weight: PackageWeight {
                weight: 0.0,
                unit_of_measurement: UnitOfMeasurement::new(&self.weight_unit_code),
            },
            ..Default::default()
        };
        package.dimensions = Some(self.dimensions()?);
        self.set_weight(&mut package)?;
        package.packaging_type = self.packaging_type()?;
        Ok(package)
    }

    pub fn dimensions(&self) -> Result<Dimensions, ShipmentError> {
        let package_type = self.shipment.package_type()?;
        let mut length = package_type.length;
        let mut width = package_type.width;
        let mut height = package_type.height;

        let code = match length_unit_code(length.unit) {
            Some(code) => code,
            None => {
                tracing::debug!(
                    "Converting package dimensions from {} to {}",
                    length.unit.symbol(),
                    FALLBACK_LENGTH_UNIT.symbol()
                );
                length = length.convert(FALLBACK_LENGTH_UNIT);
                width = width.convert(FALLBACK_LENGTH_UNIT);
                height = height.convert(FALLBACK_LENGTH_UNIT);
                UnitOfMeasurement::UOM_IN
            }
        };

        // Rotated: height <- length, width <- height, length <- width
        Ok(Dimensions {
            length: whole_dimension(&width),
            width: whole_dimension(&height),
            height: whole_dimension(&length),
            unit_of_measurement: UnitOfMeasurement::new(code),
        })
    }

    /// Set the package weight, converting into the unit the package already carries.
    ///
    /// When the package's unit code is neither `KGS` nor `LBS` the weight is
    /// left in its own unit, unless that unit has no UPS code (grams, ounces);
    /// then it is converted to pounds so the code sent is always `KGS` or `LBS`.
    pub fn set_weight(&self, package: &mut Package) -> Result<(), ShipmentError> {
        let mut weight = self.shipment.weight()?;

        if let Some(valid_unit) = valid_weight_unit(&package.package_weight) {
            if weight.unit != valid_unit {
                weight = weight.convert(valid_unit);
            }
        }

        let code = match weight_unit_code(weight.unit) {
            Some(code) => code,
            None => {
                weight = weight.convert(FALLBACK_WEIGHT_UNIT);
                UnitOfMeasurement::UOM_LBS
            }
        };

        package.package_weight = PackageWeight {
            weight: weight.number,
            unit_of_measurement: UnitOfMeasurement::new(code),
        };
        Ok(())
    }

    pub fn packaging_type(&self) -> Result<PackagingType, ShipmentError> {
        let remote_id = self.shipment.package_type()?.remote_id.as_deref();
        let code = match remote_id {
            Some(id) if !id.is_empty() && id != packaging::CUSTOM => id,
            _ => packaging::UNKNOWN,
        };
        Ok(PackagingType::new(code))
    }
}

/// UPS code for a length unit, if UPS accepts it
pub fn length_unit_code(unit: LengthUnit) -> Option<&'static str> {
    match unit {
        LengthUnit::Inch => Some(UnitOfMeasurement::UOM_IN),
        LengthUnit::Centimeter => Some(UnitOfMeasurement::UOM_CM),
        _ => None,
    }
}

/// UPS code for a weight unit, if UPS accepts it
pub fn weight_unit_code(unit: WeightUnit) -> Option<&'static str> {
    match unit {
        WeightUnit::Kilogram => Some(UnitOfMeasurement::UOM_KGS),
        WeightUnit::Pound => Some(UnitOfMeasurement::UOM_LBS),
        _ => None,
    }
}

/// Weight unit matching the code already set on a package weight
pub fn valid_weight_unit(package_weight: &PackageWeight) -> Option<WeightUnit> {
    match package_weight.unit_of_measurement.code.as_str() {
        UnitOfMeasurement::UOM_KGS => Some(WeightUnit::Kilogram),
        UnitOfMeasurement::UOM_LBS => Some(WeightUnit::Pound),
        _ => None,
    }
}

/// Round to a whole number; UPS rejects zero so anything below 1 (or NaN)
/// becomes 1. Values past `u32::MAX` saturate.
fn whole_dimension(length: &Length) -> u32 {
    let rounded = length.number.round();
    if rounded.is_nan() || rounded < 1.0 {
        1
    } else {
        rounded.min(u32::MAX as f64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PackageType, Weight};

    fn address(city: &str, suburb: &str) -> core::Address {
        core::Address {
            country_code: "US".into(),
            administrative_area: "NY".into(),
            locality: city.into(),
            dependent_locality: suburb.into(),
            postal_code: "10001".into(),
            address_line1: "1 Main St".into(),
            address_line2: "Suite 5".into(),
            given_name: Some("Jane".into()),
            family_name: Some("Doe".into()),
            ..Default::default()
        }
    }

    fn package_type(l: f64, w: f64, h: f64, unit: LengthUnit, remote_id: Option<&str>) -> PackageType {
        PackageType {
            id: "box".into(),
            label: "Box".into(),
            remote_id: remote_id.map(String::from),
            length: Length::new(l, unit),
            width: Length::new(w, unit),
            height: Length::new(h, unit),
            weight: None,
        }
    }

    fn shipment(package: PackageType, weight: Weight) -> core::Shipment {
        core::Shipment {
            id: Some("1".into()),
            shipping_address: Some(address("New York", "Chelsea")),
            store_address: Some(address("Brooklyn", "Williamsburg")),
            package_type: Some(package),
            weight: Some(weight),
        }
    }

    fn lb(n: f64) -> Weight {
        Weight::new(n, WeightUnit::Pound)
    }

    #[test]
    fn test_ship_to_uses_locality() {
        let s = shipment(package_type(1.0, 1.0, 1.0, LengthUnit::Inch, None), lb(1.0));
        let ship_to = ShipmentAdapter::new(&s).ship_to().unwrap();
        assert_eq!(ship_to.name.as_deref(), Some("Jane Doe"));
        assert_eq!(
            ship_to.address,
            Address {
                address_line1: "1 Main St".into(),
                address_line2: "Suite 5".into(),
                city: "New York".into(),
                state_province_code: "NY".into(),
                postal_code: "10001".into(),
                country_code: "US".into(),
            }
        );
    }

    #[test]
    fn test_ship_from_uses_dependent_locality() {
        let s = shipment(package_type(1.0, 1.0, 1.0, LengthUnit::Inch, None), lb(1.0));
        let ship_from = ShipmentAdapter::new(&s).ship_from().unwrap();
        assert_eq!(ship_from.address.city, "Williamsburg");
        assert_eq!(ship_from.address.state_province_code, "NY");
    }

    #[test]
    fn test_dimensions_in_accepted_unit_are_rounded() {
        let s = shipment(
            package_type(10.4, 8.5, 2.5, LengthUnit::Centimeter, None),
            lb(1.0),
        );
        let dims = ShipmentAdapter::new(&s).dimensions().unwrap();
        assert_eq!(dims.height, 10);
        assert_eq!(dims.length, 9);
        assert_eq!(dims.width, 3);
        assert_eq!(dims.unit_of_measurement.code, "CM");
    }

    #[test]
    fn test_dimensions_converted_to_inches() {
        // 254 mm = 10 in, 127 mm = 5 in, 12.7 mm = 0.5 in
        let s = shipment(
            package_type(254.0, 127.0, 12.7, LengthUnit::Millimeter, None),
            lb(1.0),
        );
        let dims = ShipmentAdapter::new(&s).dimensions().unwrap();
        assert_eq!(dims.height, 10);
        assert_eq!(dims.length, 5);
        assert_eq!(dims.width, 1);
        assert_eq!(dims.unit_of_measurement.code, "IN");

        let s = shipment(package_type(1.0, 2.0, 0.5, LengthUnit::Foot, None), lb(1.0));
        let dims = ShipmentAdapter::new(&s).dimensions().unwrap();
        assert_eq!((dims.length, dims.width, dims.height), (24, 6, 12));
        assert_eq!(dims.unit_of_measurement.code, "IN");
    }

    #[test]
    fn test_dimension_field_order() {
        let s = shipment(
            package_type(20.0, 10.0, 5.0, LengthUnit::Inch, None),
            lb(1.0),
        );
        let dims = ShipmentAdapter::new(&s).dimensions().unwrap();
        assert_eq!(dims.height, 20);
        assert_eq!(dims.width, 5);
        assert_eq!(dims.length, 10);
    }

    #[test]
    fn test_dimensions_non_finite() {
        let s = shipment(
            package_type(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, LengthUnit::Inch, None),
            lb(1.0),
        );
        let dims = ShipmentAdapter::new(&s).dimensions().unwrap();
        assert_eq!(dims.height, 1);
        assert_eq!(dims.length, u32::MAX);
        assert_eq!(dims.width, 1);
    }

    #[test]
    fn test_dimensions_never_zero() {
        let s = shipment(
            package_type(0.2, 0.0, 0.49, LengthUnit::Inch, None),
            lb(1.0),
        );
        let dims = ShipmentAdapter::new(&s).dimensions().unwrap();
        assert_eq!((dims.length, dims.width, dims.height), (1, 1, 1));

        // 2 mm is well under half an inch
        let s = shipment(package_type(2.0, 2.0, 2.0, LengthUnit::Millimeter, None), lb(1.0));
        let dims = ShipmentAdapter::new(&s).dimensions().unwrap();
        assert_eq!((dims.length, dims.width, dims.height), (1, 1, 1));
    }

    #[test]
    fn test_weight_converted_to_package_unit() {
        let s = shipment(
            package_type(1.0, 1.0, 1.0, LengthUnit::Inch, None),
            Weight::new(1.0, WeightUnit::Kilogram),
        );
        let package = ShipmentAdapter::new(&s).package().unwrap();
        assert_eq!(package.package_weight.unit_of_measurement.code, "LBS");
        assert!((package.package_weight.weight - 2.204_622_621_848_775_6).abs() < 1e-9);
    }

    #[test]
    fn test_weight_not_rounded() {
        let s = shipment(package_type(1.0, 1.0, 1.0, LengthUnit::Inch, None), lb(0.3));
        let package = ShipmentAdapter::new(&s).package().unwrap();
        assert!((package.package_weight.weight - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weight_kgs_package() {
        let s = shipment(
            package_type(1.0, 1.0, 1.0, LengthUnit::Inch, None),
            Weight::new(500.0, WeightUnit::Gram),
        );
        let package = ShipmentAdapter::new(&s)
            .with_weight_unit_code("KGS")
            .package()
            .unwrap();
        assert_eq!(package.package_weight.unit_of_measurement.code, "KGS");
        assert!((package.package_weight.weight - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_weight_without_valid_package_unit() {
        let s = shipment(
            package_type(1.0, 1.0, 1.0, LengthUnit::Inch, None),
            Weight::new(2.0, WeightUnit::Kilogram),
        );
        let package = ShipmentAdapter::new(&s)
            .with_weight_unit_code("XYZ")
            .package()
            .unwrap();
        assert_eq!(package.package_weight.unit_of_measurement.code, "KGS");
        assert!((package.package_weight.weight - 2.0).abs() < f64::EPSILON);

        let s = shipment(
            package_type(1.0, 1.0, 1.0, LengthUnit::Inch, None),
            Weight::new(32.0, WeightUnit::Ounce),
        );
        let package = ShipmentAdapter::new(&s)
            .with_weight_unit_code("XYZ")
            .package()
            .unwrap();
        assert_eq!(package.package_weight.unit_of_measurement.code, "LBS");
        assert!((package.package_weight.weight - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_packaging_type() {
        for (remote_id, expected) in [
            (None, "00"),
            (Some(""), "00"),
            (Some("custom"), "00"),
            (Some("02"), "02"),
            (Some("2a"), "2a"),
        ] {
            let s = shipment(
                package_type(1.0, 1.0, 1.0, LengthUnit::Inch, remote_id),
                lb(1.0),
            );
            let code = ShipmentAdapter::new(&s).packaging_type().unwrap().code;
            assert_eq!(code, expected, "remote id {:?}", remote_id);
        }
    }

    #[test]
    fn test_full_shipment() {
        let s = shipment(
            package_type(5.0, 4.0, 2.5, LengthUnit::Centimeter, Some("02")),
            lb(3.0),
        );
        let ups = ShipmentAdapter::new(&s).shipment().unwrap();

        assert_eq!(ups.ship_to.address.city, "New York");
        assert_eq!(ups.ship_from.address.city, "Williamsburg");
        assert_eq!(ups.packages.len(), 1);
        assert!(ups.rate_information.is_none());

        let package = &ups.packages[0];
        assert_eq!(
            package.dimensions,
            Some(Dimensions {
                length: 4,
                width: 3,
                height: 5,
                unit_of_measurement: UnitOfMeasurement::new("CM"),
            })
        );
        assert_eq!(package.package_weight.weight, 3.0);
        assert_eq!(package.packaging_type.code, "02");
    }

    #[test]
    fn test_missing_data_is_error() {
        let mut s = shipment(package_type(1.0, 1.0, 1.0, LengthUnit::Inch, None), lb(1.0));
        s.store_address = None;
        assert_eq!(
            ShipmentAdapter::new(&s).shipment().unwrap_err(),
            ShipmentError::MissingStoreAddress
        );

        s.store_address = Some(address("a", "b"));
        s.package_type = None;
        assert_eq!(
            ShipmentAdapter::new(&s).shipment().unwrap_err(),
            ShipmentError::MissingPackageType
        );
    }
}
