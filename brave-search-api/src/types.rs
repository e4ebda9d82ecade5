//! Response types for the Brave Search endpoints we consume

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Opaque identifier of a location returned by a `result_filter=locations` query
pub type LocationId = String;

/// Descriptions keyed by location id
pub type DescriptionMap = HashMap<LocationId, String>;

/// A single web search hit
///
/// Missing and `null` fields both come through as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /web/search`
#[derive(Debug, Default, Deserialize)]
pub struct WebSearchResponse {
    pub web: Option<WebSection>,
    pub locations: Option<LocationSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebSection {
    #[serde(default)]
    pub results: Vec<WebResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationSection {
    #[serde(default)]
    pub results: Vec<LocationRef>,
}

/// Location stub from a web search; only the id is used
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationRef {
    pub id: Option<LocationId>,
}

impl WebSearchResponse {
    /// Web hits, or an empty list when the `web` section is missing
    pub fn into_web_results(self) -> Vec<WebResult> {
        self.web.map(|web| web.results).unwrap_or_default()
    }

    /// Non-empty location ids in response order, without duplicates
    pub fn location_ids(&self) -> Vec<LocationId> {
        let mut ids: Vec<LocationId> = Vec::new();
        let refs = self
            .locations
            .as_ref()
            .map(|l| l.results.as_slice())
            .unwrap_or_default();

        for id in refs.iter().filter_map(|r| r.id.as_deref()) {
            if !id.is_empty() && !ids.iter().any(|seen| seen == id) {
                ids.push(id.to_string());
            }
        }
        ids
    }
}

/// Postal address of a place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
}

impl PostalAddress {
    /// Non-empty parts in street, locality, region, postal code order
    pub fn parts(&self) -> Vec<&str> {
        [
            &self.street_address,
            &self.address_locality,
            &self.address_region,
            &self.postal_code,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Aggregate review score.
///
/// Both numbers are kept as raw JSON numbers so they are rendered exactly as
/// the API sent them, integer or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub rating_value: Option<serde_json::Number>,
    pub rating_count: Option<serde_json::Number>,
}

/// Detailed record for a local business or place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOfInterest {
    pub id: LocationId,
    pub name: Option<String>,
    pub address: Option<PostalAddress>,
    pub coordinates: Option<Coordinates>,
    pub phone: Option<String>,
    pub rating: Option<Rating>,
    pub opening_hours: Option<Vec<String>>,
    pub price_range: Option<String>,
}

/// Body of `GET /local/pois`
#[derive(Debug, Default, Deserialize)]
pub struct PoiResponse {
    #[serde(default)]
    pub results: Vec<PlaceOfInterest>,
}

/// Body of `GET /local/descriptions`
#[derive(Debug, Default, Deserialize)]
pub struct DescriptionResponse {
    #[serde(default)]
    pub descriptions: HashMap<LocationId, Option<String>>,
}

impl DescriptionResponse {
    /// Drop entries whose description is null
    pub fn into_map(self) -> DescriptionMap {
        self.descriptions
            .into_iter()
            .filter_map(|(id, text)| text.map(|text| (id, text)))
            .collect()
    }
}
