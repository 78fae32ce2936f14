//! UPS service and packaging code catalogs

/// UPS service codes and their display names
pub const SERVICES: &[(&str, &str)] = &[
    ("01", "UPS Next Day Air"),
    ("02", "UPS 2nd Day Air"),
    ("03", "UPS Ground"),
    ("07", "UPS Worldwide Express"),
    ("08", "UPS Worldwide Expedited"),
    ("11", "UPS Standard"),
    ("12", "UPS 3 Day Select"),
    ("13", "UPS Next Day Air Saver"),
    ("14", "UPS Next Day Air Early"),
    ("54", "UPS Worldwide Express Plus"),
    ("59", "UPS 2nd Day Air A.M."),
    ("65", "UPS Saver"),
    ("70", "UPS Access Point Economy"),
    ("96", "UPS Worldwide Express Freight"),
    ("M2", "UPS First Class Mail"),
    ("M3", "UPS Priority Mail"),
    ("M4", "UPS Expedited Mail Innovations"),
    ("M5", "UPS Priority Mail Innovations"),
    ("M6", "UPS Economy Mail Innovations"),
];

/// Display name for a service code
pub fn service_name(code: &str) -> Option<&'static str> {
    SERVICES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// UPS packaging type codes
pub mod packaging {
    /// Packaging not specified
    pub const UNKNOWN: &str = "00";
    pub const UPS_LETTER: &str = "01";
    pub const CUSTOMER_SUPPLIED: &str = "02";
    pub const TUBE: &str = "03";
    pub const PAK: &str = "04";
    pub const EXPRESS_BOX: &str = "21";
    pub const BOX_25KG: &str = "24";
    pub const BOX_10KG: &str = "25";
    pub const PALLET: &str = "30";
    pub const SMALL_EXPRESS_BOX: &str = "2a";
    pub const MEDIUM_EXPRESS_BOX: &str = "2b";
    pub const LARGE_EXPRESS_BOX: &str = "2c";

    /// Remote id package types use when they are merchant-defined
    pub const CUSTOM: &str = "custom";

    pub const ALL: &[(&str, &str)] = &[
        (UNKNOWN, "Unknown"),
        (UPS_LETTER, "UPS Letter"),
        (CUSTOMER_SUPPLIED, "Customer Supplied Package"),
        (TUBE, "Tube"),
        (PAK, "PAK"),
        (EXPRESS_BOX, "UPS Express Box"),
        (BOX_25KG, "UPS 25KG Box"),
        (BOX_10KG, "UPS 10KG Box"),
        (PALLET, "Pallet"),
        (SMALL_EXPRESS_BOX, "Small Express Box"),
        (MEDIUM_EXPRESS_BOX, "Medium Express Box"),
        (LARGE_EXPRESS_BOX, "Large Express Box"),
    ];
}
