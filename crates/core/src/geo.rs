//! Geographic types: coordinates, address components, resolved places

use serde::{Deserialize, Serialize};

/// A device position fix (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// Administrative-level type labels used by geocoding providers.
///
/// The parser depends only on this tagging contract, not on any specific
/// provider SDK.
pub mod component_types {
    pub const LOCALITY: &str = "locality";
    pub const SUBLOCALITY: &str = "sublocality";
    pub const NEIGHBORHOOD: &str = "neighborhood";
    pub const ADMIN_AREA_LEVEL_1: &str = "administrative_area_level_1";
    pub const ADMIN_AREA_LEVEL_2: &str = "administrative_area_level_2";
    pub const COUNTRY: &str = "country";
    pub const POSTAL_CODE: &str = "postal_code";
}

/// One entry of a reverse-geocoding response: a display name tagged with
/// one or more administrative-level type labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Display name for this administrative level
    pub long_name: String,
    /// Type labels (a component may carry several)
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn new(long_name: impl Into<String>, types: &[&str]) -> Self {
        Self {
            long_name: long_name.into(),
            types: types.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Check whether this component is tagged with the given level
    pub fn has_type(&self, label: &str) -> bool {
        self.types.iter().any(|t| t == label)
    }
}

/// A resolved location. String fields are never empty: any administrative
/// level missing from the geocoding result is filled with its sentinel so
/// downstream consumers can render unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// The coordinate this record was resolved from
    pub coordinate: Coordinate,
    pub city: String,
    pub area: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

impl PlaceRecord {
    pub const UNKNOWN_CITY: &'static str = "Unknown City";
    pub const UNKNOWN_AREA: &'static str = "Unknown Area";
    pub const UNKNOWN_STATE: &'static str = "Unknown State";
    pub const UNKNOWN_COUNTRY: &'static str = "Unknown Country";
    pub const UNKNOWN_POSTAL_CODE: &'static str = "000000";

    /// Create a record with every field at its sentinel value
    pub fn unknown(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            city: Self::UNKNOWN_CITY.to_string(),
            area: Self::UNKNOWN_AREA.to_string(),
            state: Self::UNKNOWN_STATE.to_string(),
            country: Self::UNKNOWN_COUNTRY.to_string(),
            postal_code: Self::UNKNOWN_POSTAL_CODE.to_string(),
        }
    }
}

impl std::fmt::Display for PlaceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {} {}",
            self.area, self.city, self.state, self.country, self.postal_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_check() {
        let component = AddressComponent::new(
            "Mumbai",
            &[component_types::LOCALITY, component_types::ADMIN_AREA_LEVEL_2],
        );
        assert!(component.has_type(component_types::LOCALITY));
        assert!(component.has_type(component_types::ADMIN_AREA_LEVEL_2));
        assert!(!component.has_type(component_types::COUNTRY));
    }

    #[test]
    fn test_unknown_place_has_no_empty_fields() {
        let place = PlaceRecord::unknown(Coordinate::new(0.0, 0.0));
        assert!(!place.city.is_empty());
        assert!(!place.area.is_empty());
        assert!(!place.state.is_empty());
        assert!(!place.country.is_empty());
        assert!(!place.postal_code.is_empty());
    }

    #[test]
    fn test_coordinate_display() {
        let coord = Coordinate::new(19.076, 72.8777);
        assert_eq!(coord.to_string(), "19.0760,72.8777");
    }
}
