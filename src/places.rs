//! Places text search HTTP adapter.
//!
//! Issues a single blocking `places:searchText` request with a route corridor
//! and turns the response into `PlaceResult`s. No retries are attempted and
//! no timeout is applied unless one is configured.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::assemble::{assemble_place, PlaceResult, RawPlace};
use crate::compress::EncodedRoute;
use crate::error::{Result, ScoutError};
use crate::route::{Coordinate, Route};
use crate::traits::PlaceSearch;

pub const DEFAULT_PLACES_URL: &str = "https://places.googleapis.com/v1/places:searchText";

pub const API_KEY_HEADER: &str = "X-Goog-Api-Key";
pub const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Attributes requested for every returned place.
pub const FIELD_MASK: &str = "places.id,places.displayName,places.formattedAddress,places.rating,\
places.location,places.types,places.userRatingCount,places.priceLevel,places.currentOpeningHours";

#[derive(Debug, Clone)]
pub struct PlacesConfig {
    pub base_url: String,
    pub api_key: String,
    /// Request timeout; `None` leaves the call unbounded.
    pub timeout_secs: Option<u64>,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PLACES_URL.to_string(),
            api_key: String::new(),
            timeout_secs: None,
        }
    }
}

impl PlacesConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlacesClient {
    config: PlacesConfig,
    client: reqwest::blocking::Client,
}

impl PlacesClient {
    pub fn new(config: PlacesConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl PlaceSearch for PlacesClient {
    fn search_along_route(
        &self,
        encoded: &EncodedRoute,
        query: &str,
        max_results: u32,
        route: &Route,
    ) -> Result<Vec<PlaceResult>> {
        let body = TextSearchRequest {
            text_query: query,
            max_result_count: max_results,
            search_along_route_parameters: SearchAlongRouteParameters {
                polyline: EncodedPolyline {
                    encoded_polyline: encoded.as_str(),
                },
            },
        };

        tracing::info!(query, max_results, "Searching for places along route");

        let response = self
            .client
            .post(&self.config.base_url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(FIELD_MASK_HEADER, FIELD_MASK)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            tracing::warn!(%status, "Place search request failed");
            return Err(classify_status(status, text));
        }

        let payload: Value = response.json()?;
        let places = places_array(&payload);
        tracing::info!(count = places.len(), "Place search returned results");

        Ok(places
            .iter()
            .map(|place| assemble_place(raw_place(place), route))
            .collect())
    }
}

/// Map a non-success status to the matching error kind.
pub fn classify_status(status: StatusCode, body: String) -> ScoutError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ScoutError::Auth { status, body },
        StatusCode::BAD_REQUEST => ScoutError::BadRequest { status, body },
        _ => ScoutError::Transport(format!("unexpected status {}: {}", status, body)),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TextSearchRequest<'a> {
    text_query: &'a str,
    max_result_count: u32,
    search_along_route_parameters: SearchAlongRouteParameters<'a>,
}

#[derive(Debug, Serialize)]
struct SearchAlongRouteParameters<'a> {
    polyline: EncodedPolyline<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EncodedPolyline<'a> {
    encoded_polyline: &'a str,
}

/// Extract the `places` array. A missing or non-array `places` means no results.
fn places_array(payload: &Value) -> &[Value] {
    payload
        .get("places")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Pull the known attributes out of one place record.
///
/// Each attribute is optional. A missing or wrongly typed value becomes
/// `None` (or an empty list for `types`); it never rejects the record.
fn raw_place(place: &Value) -> RawPlace {
    let text = |key: &str| place.get(key).and_then(Value::as_str).map(str::to_string);

    let location = place.get("location").and_then(|loc| {
        let lat = loc.get("latitude").and_then(Value::as_f64)?;
        let lon = loc.get("longitude").and_then(Value::as_f64)?;
        Some(Coordinate::new(lat, lon))
    });

    let types = place
        .get("types")
        .and_then(Value::as_array)
        .map(|types| types.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();

    RawPlace {
        id: text("id").filter(|id| !id.is_empty()),
        name: place
            .pointer("/displayName/text")
            .and_then(Value::as_str)
            .map(str::to_string),
        address: text("formattedAddress"),
        rating: place.get("rating").and_then(Value::as_f64),
        rating_count: place
            .get("userRatingCount")
            .and_then(Value::as_u64)
            .and_then(|count| u32::try_from(count).ok()),
        location,
        types,
        price_code: text("priceLevel"),
        open_now: place
            .pointer("/currentOpeningHours/openNow")
            .and_then(Value::as_bool),
    }
}
