//! Structured addresses built from provider address components

use serde::{Deserialize, Serialize};
use tracing::trace;

/// One typed piece of a reverse-geocoded address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// A flat, structured address
///
/// Fields the provider did not report stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street_number: Option<String>,
    pub route: Option<String>,
    pub locality: Option<String>,
    pub sublocality: Option<String>,
    pub neighborhood: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub administrative_area_level_1: Option<String>,
    pub administrative_area_level_2: Option<String>,
}

impl Address {
    /// Build an address from a result's components
    ///
    /// Every type tag of every component is considered, so a component tagged
    /// both `locality` and `political` still fills `locality`, and one tagged
    /// with two known types fills both fields. Unknown tags are skipped. When
    /// several components carry the same known tag, the last one wins.
    pub fn from_components(components: &[AddressComponent]) -> Self {
        let mut address = Address::default();

        for component in components {
            for tag in &component.types {
                let Some(field) = address.field_mut(tag) else {
                    trace!(tag = %tag, "ignoring address component type");
                    continue;
                };
                *field = Some(component.long_name.clone());
            }
        }

        address
    }

    /// True when no field is populated
    pub fn is_empty(&self) -> bool {
        *self == Address::default()
    }

    fn field_mut(&mut self, tag: &str) -> Option<&mut Option<String>> {
        match tag {
            "street_number" => Some(&mut self.street_number),
            "route" => Some(&mut self.route),
            "locality" => Some(&mut self.locality),
            "sublocality" => Some(&mut self.sublocality),
            "neighborhood" => Some(&mut self.neighborhood),
            "postal_code" => Some(&mut self.postal_code),
            "country" => Some(&mut self.country),
            "administrative_area_level_1" => Some(&mut self.administrative_area_level_1),
            "administrative_area_level_2" => Some(&mut self.administrative_area_level_2),
            _ => None,
        }
    }
}

impl From<&[AddressComponent]> for Address {
    fn from(components: &[AddressComponent]) -> Self {
        Self::from_components(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(long_name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_string(),
            short_name: long_name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_known_tags_populate_fields() {
        let components = vec![
            component("1600", &["street_number"]),
            component("Mountain View", &["locality", "political"]),
            component("Old Mountain View", &["sublocality", "political"]),
            component("94043", &["postal_code"]),
            component("United States", &["country", "political"]),
            component("California", &["administrative_area_level_1", "political"]),
            component("Santa Clara County", &["administrative_area_level_2", "political"]),
        ];

        let address = Address::from_components(&components);

        assert_eq!(
            address,
            Address {
                street_number: Some("1600".to_string()),
                route: None,
                locality: Some("Mountain View".to_string()),
                sublocality: Some("Old Mountain View".to_string()),
                neighborhood: None,
                postal_code: Some("94043".to_string()),
                country: Some("United States".to_string()),
                administrative_area_level_1: Some("California".to_string()),
                administrative_area_level_2: Some("Santa Clara County".to_string()),
            }
        );
    }

    #[test]
    fn test_route_and_neighborhood() {
        let components = vec![
            component("Amphitheatre Parkway", &["route"]),
            component("Lower Manhattan", &["neighborhood", "political"]),
        ];

        let address = Address::from_components(&components);

        assert_eq!(address.route.as_deref(), Some("Amphitheatre Parkway"));
        assert_eq!(address.neighborhood.as_deref(), Some("Lower Manhattan"));
        assert!(address.locality.is_none());
    }

    #[test]
    fn test_unknown_tags_ignored() {
        let components = vec![
            component("Earth", &["planet", "political"]),
            component("Somewhere", &["premise", "establishment", "point_of_interest"]),
        ];

        let address = Address::from_components(&components);
        assert!(address.is_empty());
    }

    #[test]
    fn test_component_with_multiple_known_tags() {
        let components = vec![component("Manhattan", &["sublocality", "neighborhood"])];

        let address = Address::from_components(&components);

        assert_eq!(address.sublocality.as_deref(), Some("Manhattan"));
        assert_eq!(address.neighborhood.as_deref(), Some("Manhattan"));
    }

    #[test]
    fn test_last_write_wins() {
        let components = vec![
            component("First", &["locality"]),
            component("Second", &["locality"]),
        ];

        let address = Address::from_components(&components);
        assert_eq!(address.locality.as_deref(), Some("Second"));
    }

    #[test]
    fn test_uses_long_name() {
        let components = vec![AddressComponent {
            long_name: "United States".to_string(),
            short_name: "US".to_string(),
            types: vec!["country".to_string()],
        }];

        let address = Address::from(components.as_slice());
        assert_eq!(address.country.as_deref(), Some("United States"));
    }

    #[test]
    fn test_empty_components() {
        assert!(Address::from_components(&[]).is_empty());
    }

    #[test]
    fn test_component_deserialization() {
        let json = r#"{"long_name": "10007", "short_name": "10007", "types": ["postal_code"]}"#;
        let parsed: AddressComponent = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.long_name, "10007");
        assert_eq!(parsed.types, vec!["postal_code"]);
    }
}
