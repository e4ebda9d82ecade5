//! Plain-text rendering of search results

use crate::types::{DescriptionMap, PlaceOfInterest, WebResult};

/// Returned by [`format_local`] when there are no places to show
pub const NO_LOCAL_RESULTS: &str = "No local results found";

const NOT_AVAILABLE: &str = "N/A";
const NO_DESCRIPTION: &str = "No description available";

/// Render web hits as `Title`/`Description`/`URL` blocks separated by blank lines.
pub fn format_web(results: &[WebResult]) -> String {
    results
        .iter()
        .map(|r| {
            format!(
                "Title: {}\nDescription: {}\nURL: {}",
                r.title, r.description, r.url
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render places with their descriptions, one block per place in input order.
///
/// Blocks are separated by a `---` line. Missing values show as `N/A`.
pub fn format_local(pois: &[PlaceOfInterest], descriptions: &DescriptionMap) -> String {
    if pois.is_empty() {
        return NO_LOCAL_RESULTS.to_string();
    }

    pois.iter()
        .map(|poi| format_place(poi, descriptions))
        .collect::<Vec<_>>()
        .join("\n---\n")
}

fn format_place(poi: &PlaceOfInterest, descriptions: &DescriptionMap) -> String {
    let address = poi
        .address
        .as_ref()
        .map(|a| a.parts().join(", "))
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let rating = poi.rating.as_ref();
    let rating_value = rating
        .and_then(|r| r.rating_value.as_ref())
        .map(ToString::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let rating_count = rating
        .and_then(|r| r.rating_count.as_ref())
        .map(ToString::to_string)
        .unwrap_or_else(|| "0".to_string());

    let hours = poi
        .opening_hours
        .as_ref()
        .filter(|h| !h.is_empty())
        .map(|h| h.join(", "))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let description = descriptions
        .get(&poi.id)
        .map(String::as_str)
        .unwrap_or(NO_DESCRIPTION);

    format!(
        "Name: {}\n\
        Address: {}\n\
        Phone: {}\n\
        Rating: {} ({} reviews)\n\
        Price Range: {}\n\
        Hours: {}\n\
        Description: {}",
        poi.name.as_deref().unwrap_or(NOT_AVAILABLE),
        address,
        poi.phone.as_deref().unwrap_or(NOT_AVAILABLE),
        rating_value,
        rating_count,
        poi.price_range.as_deref().unwrap_or(NOT_AVAILABLE),
        hours,
        description,
    )
}
