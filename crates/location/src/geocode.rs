//! Reverse-geocoding client and address-component parsing
//!
//! The parser depends only on the component tagging contract, not on any
//! provider SDK. The bundled HTTP client speaks the common
//! `latlng` → `{status, results: [{address_components}]}` JSON shape.

use async_trait::async_trait;

use vita_path_core::geo::component_types;
use vita_path_core::{
    AddressComponent, Coordinate, Error, PlaceRecord, Result, ReverseGeocoder,
};

/// Build a [`PlaceRecord`] from a provider's component list.
///
/// Field precedence:
/// - city: `locality`, falling back to `administrative_area_level_2`
/// - area: `sublocality`, falling back to `neighborhood`
/// - state: `administrative_area_level_1`
/// - country: `country`
/// - postal code: `postal_code`
///
/// The preferred tag wins even when the fallback tag appears earlier in
/// the list, and a component carrying both tags counts for the preferred
/// one. Within a single tag the first occurrence wins. Levels absent from
/// the response get their sentinel; no field is ever left empty.
pub fn parse_place(coordinate: Coordinate, components: &[AddressComponent]) -> PlaceRecord {
    let mut city: Option<&str> = None;
    let mut city_fallback: Option<&str> = None;
    let mut area: Option<&str> = None;
    let mut area_fallback: Option<&str> = None;
    let mut state: Option<&str> = None;
    let mut country: Option<&str> = None;
    let mut postal_code: Option<&str> = None;

    for component in components {
        let name = component.long_name.as_str();

        if component.has_type(component_types::LOCALITY) {
            city.get_or_insert(name);
        } else if component.has_type(component_types::ADMIN_AREA_LEVEL_2) {
            city_fallback.get_or_insert(name);
        }

        if component.has_type(component_types::SUBLOCALITY) {
            area.get_or_insert(name);
        } else if component.has_type(component_types::NEIGHBORHOOD) {
            area_fallback.get_or_insert(name);
        }

        if component.has_type(component_types::ADMIN_AREA_LEVEL_1) {
            state.get_or_insert(name);
        }
        if component.has_type(component_types::COUNTRY) {
            country.get_or_insert(name);
        }
        if component.has_type(component_types::POSTAL_CODE) {
            postal_code.get_or_insert(name);
        }
    }

    PlaceRecord {
        coordinate,
        city: city
            .or(city_fallback)
            .unwrap_or(PlaceRecord::UNKNOWN_CITY)
            .to_string(),
        area: area
            .or(area_fallback)
            .unwrap_or(PlaceRecord::UNKNOWN_AREA)
            .to_string(),
        state: state.unwrap_or(PlaceRecord::UNKNOWN_STATE).to_string(),
        country: country.unwrap_or(PlaceRecord::UNKNOWN_COUNTRY).to_string(),
        postal_code: postal_code
            .unwrap_or(PlaceRecord::UNKNOWN_POSTAL_CODE)
            .to_string(),
    }
}

/// Reverse-geocoding client for a JSON geocode endpoint.
pub struct HttpGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpGeocoder {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }
}

#[async_trait]
impl ReverseGeocoder for HttpGeocoder {
    async fn reverse(&self, coordinate: Coordinate) -> Result<Vec<AddressComponent>> {
        let latlng = format!("{},{}", coordinate.latitude, coordinate.longitude);
        let mut query: Vec<(&str, &str)> = vec![("latlng", latlng.as_str())];
        if let Some(key) = &self.api_key {
            query.push(("key", key.as_str()));
        }

        let resp = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Error::GeocodeFailure(format!(
                "provider returned HTTP {}",
                resp.status()
            )));
        }

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| Error::Provider(e.to_string()))?;

        parse_response(&body)
    }
}

/// Parses the provider's JSON envelope into the component list.
fn parse_response(body: &serde_json::Value) -> Result<Vec<AddressComponent>> {
    let status = body["status"].as_str().unwrap_or("MISSING_STATUS");
    if status != "OK" {
        return Err(Error::GeocodeFailure(format!("provider status {status}")));
    }

    let first = body["results"]
        .as_array()
        .and_then(|results| results.first())
        .ok_or_else(|| Error::GeocodeFailure("no results".to_string()))?;

    let components = first["address_components"]
        .as_array()
        .ok_or_else(|| Error::GeocodeFailure("missing address_components".to_string()))?;

    Ok(components
        .iter()
        .filter_map(|component| {
            let long_name = component["long_name"].as_str()?;
            let types = component["types"]
                .as_array()?
                .iter()
                .filter_map(|t| t.as_str().map(String::from))
                .collect();
            Some(AddressComponent {
                long_name: long_name.to_string(),
                types,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord() -> Coordinate {
        Coordinate::new(19.076, 72.8777)
    }

    #[test]
    fn test_parse_full_component_list() {
        let components = vec![
            AddressComponent::new("Bandra West", &[component_types::SUBLOCALITY]),
            AddressComponent::new("Mumbai", &[component_types::LOCALITY]),
            AddressComponent::new("Mumbai Suburban", &[component_types::ADMIN_AREA_LEVEL_2]),
            AddressComponent::new("Maharashtra", &[component_types::ADMIN_AREA_LEVEL_1]),
            AddressComponent::new("India", &[component_types::COUNTRY]),
            AddressComponent::new("400050", &[component_types::POSTAL_CODE]),
        ];

        let place = parse_place(coord(), &components);
        assert_eq!(place.city, "Mumbai");
        assert_eq!(place.area, "Bandra West");
        assert_eq!(place.state, "Maharashtra");
        assert_eq!(place.country, "India");
        assert_eq!(place.postal_code, "400050");
    }

    #[test]
    fn test_missing_levels_get_sentinels() {
        let components = vec![AddressComponent::new("India", &[component_types::COUNTRY])];
        let place = parse_place(coord(), &components);
        assert_eq!(place.city, PlaceRecord::UNKNOWN_CITY);
        assert_eq!(place.area, PlaceRecord::UNKNOWN_AREA);
        assert_eq!(place.state, PlaceRecord::UNKNOWN_STATE);
        assert_eq!(place.country, "India");
        assert_eq!(place.postal_code, PlaceRecord::UNKNOWN_POSTAL_CODE);

        let place = parse_place(coord(), &[]);
        assert_eq!(place.country, PlaceRecord::UNKNOWN_COUNTRY);
    }

    #[test]
    fn test_locality_beats_admin_level_2_regardless_of_order() {
        let components = vec![
            AddressComponent::new("Mumbai Suburban", &[component_types::ADMIN_AREA_LEVEL_2]),
            AddressComponent::new("Mumbai", &[component_types::LOCALITY]),
        ];
        assert_eq!(parse_place(coord(), &components).city, "Mumbai");

        // Without a locality the level-2 name is used
        let components = vec![AddressComponent::new(
            "Mumbai Suburban",
            &[component_types::ADMIN_AREA_LEVEL_2],
        )];
        assert_eq!(parse_place(coord(), &components).city, "Mumbai Suburban");
    }

    #[test]
    fn test_component_with_both_tags_counts_as_preferred() {
        // A single component tagged with both levels: the first-checked
        // tag wins for that component.
        let components = vec![
            AddressComponent::new(
                "Mumbai",
                &[component_types::LOCALITY, component_types::ADMIN_AREA_LEVEL_2],
            ),
            AddressComponent::new("Khar", &[component_types::NEIGHBORHOOD]),
            AddressComponent::new("Bandra West", &[component_types::SUBLOCALITY]),
        ];
        let place = parse_place(coord(), &components);
        assert_eq!(place.city, "Mumbai");
        // sublocality is preferred over the earlier neighborhood
        assert_eq!(place.area, "Bandra West");
    }

    #[test]
    fn test_parses_provider_response() {
        let body = serde_json::json!({
            "status": "OK",
            "results": [{
                "address_components": [
                    { "long_name": "Mumbai", "short_name": "Mumbai", "types": ["locality", "political"] },
                    { "long_name": "India", "short_name": "IN", "types": ["country", "political"] }
                ]
            }]
        });
        let components = parse_response(&body).unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].long_name, "Mumbai");
        assert!(components[0].has_type(component_types::LOCALITY));
    }

    #[test]
    fn test_non_ok_status_is_a_geocode_failure() {
        let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });
        assert!(matches!(
            parse_response(&body),
            Err(Error::GeocodeFailure(_))
        ));

        let body = serde_json::json!({ "status": "OK", "results": [] });
        assert!(matches!(
            parse_response(&body),
            Err(Error::GeocodeFailure(_))
        ));
    }
}
