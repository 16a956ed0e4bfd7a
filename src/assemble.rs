//! Derived fields for place results: price symbols, distances, and links.

use serde::Serialize;

use crate::geometry::distance_from_route;
use crate::route::{Coordinate, Route};

/// Meters in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.34;

/// Category tags kept per place.
pub const MAX_TYPES: usize = 3;

/// Name used when the service omits a display name.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Price tier reported by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PriceTier {
    #[default]
    Unknown,
    Free,
    Inexpensive,
    Moderate,
    Expensive,
    VeryExpensive,
}

impl PriceTier {
    /// Map an upstream price level code. Unrecognised or missing codes are `Unknown`.
    pub fn from_api_code(code: Option<&str>) -> Self {
        match code {
            Some("PRICE_LEVEL_FREE") => PriceTier::Free,
            Some("PRICE_LEVEL_INEXPENSIVE") => PriceTier::Inexpensive,
            Some("PRICE_LEVEL_MODERATE") => PriceTier::Moderate,
            Some("PRICE_LEVEL_EXPENSIVE") => PriceTier::Expensive,
            Some("PRICE_LEVEL_VERY_EXPENSIVE") => PriceTier::VeryExpensive,
            _ => PriceTier::Unknown,
        }
    }

    /// Parse a display symbol back into a tier, as typed by a user.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "Free" | "free" => Some(PriceTier::Free),
            "$" => Some(PriceTier::Inexpensive),
            "$$" => Some(PriceTier::Moderate),
            "$$$" => Some(PriceTier::Expensive),
            "$$$$" => Some(PriceTier::VeryExpensive),
            _ => None,
        }
    }

    /// Display symbol; empty for `Unknown`.
    pub fn symbol(self) -> &'static str {
        match self {
            PriceTier::Unknown => "",
            PriceTier::Free => "Free",
            PriceTier::Inexpensive => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Expensive => "$$$",
            PriceTier::VeryExpensive => "$$$$",
        }
    }

    pub fn is_known(self) -> bool {
        self != PriceTier::Unknown
    }
}

/// A place found along the route, with derived fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub location: Option<Coordinate>,
    pub types: Vec<String>,
    pub price: PriceTier,
    pub open_now: Option<bool>,
    pub distance_m: Option<f64>,
    pub distance_mi: Option<f64>,
    pub distance_display: String,
    pub maps_url: String,
}

impl PlaceResult {
    pub fn price_symbol(&self) -> &'static str {
        self.price.symbol()
    }
}

/// Raw per-place fields before derivation, with absent attributes already defaulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPlace {
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub location: Option<Coordinate>,
    pub types: Vec<String>,
    pub price_code: Option<String>,
    pub open_now: Option<bool>,
}

pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// `"{miles:.1} mi"`, or empty when the distance is unknown.
pub fn distance_display(distance_mi: Option<f64>) -> String {
    distance_mi.map(|mi| format!("{:.1} mi", mi)).unwrap_or_default()
}

/// Link to the place listing, falling back to a coordinate search.
pub fn maps_url(id: Option<&str>, location: Option<Coordinate>) -> String {
    match (id.filter(|id| !id.is_empty()), location) {
        (Some(id), _) => format!("https://www.google.com/maps/place/?q=place_id:{}", id),
        (None, Some(loc)) => format!(
            "https://www.google.com/maps/search/?api=1&query={:?},{:?}",
            loc.lat, loc.lon
        ),
        (None, None) => String::new(),
    }
}

/// Build a result, measuring distance against `route` when both a location and route points exist.
pub fn assemble_place(raw: RawPlace, route: &Route) -> PlaceResult {
    let distance_m = raw
        .location
        .and_then(|loc| distance_from_route(loc, route));
    let distance_mi = distance_m.map(meters_to_miles);
    let maps_url = maps_url(raw.id.as_deref(), raw.location);

    let mut types = raw.types;
    types.truncate(MAX_TYPES);

    PlaceResult {
        id: raw.id.unwrap_or_default(),
        name: raw.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        address: raw.address.unwrap_or_default(),
        rating: raw.rating,
        rating_count: raw.rating_count,
        location: raw.location,
        types,
        price: PriceTier::from_api_code(raw.price_code.as_deref()),
        open_now: raw.open_now,
        distance_m,
        distance_mi,
        distance_display: distance_display(distance_mi),
        maps_url,
    }
}
