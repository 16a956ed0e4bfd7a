//! One search action: validate inputs, encode the route, search, filter.
//!
//! Nothing is kept between calls.

use crate::assemble::PlaceResult;
use crate::compress::{encode_route_with, DEFAULT_MAX_POINTS};
use crate::error::{Result, ScoutError};
use crate::filter::PlaceFilter;
use crate::route::Route;
use crate::traits::PlaceSearch;

pub const DEFAULT_MAX_RESULTS: u32 = 20;

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
    /// Point ceiling for the encoded corridor.
    pub max_points: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

/// Places kept by the filter, plus how many the service returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoutReport {
    pub total: usize,
    pub places: Vec<PlaceResult>,
}

impl ScoutReport {
    pub fn is_filtered(&self) -> bool {
        self.places.len() < self.total
    }
}

pub fn validate_route(route: &Route) -> Result<()> {
    if route.meets_minimum() {
        Ok(())
    } else {
        Err(ScoutError::RouteTooShort { points: route.len() })
    }
}

pub fn scout<S: PlaceSearch>(
    route: &Route,
    request: &SearchRequest,
    search: &S,
    filter: &PlaceFilter,
) -> Result<ScoutReport> {
    validate_route(route)?;
    if request.query.trim().is_empty() {
        return Err(ScoutError::EmptyQuery);
    }

    let encoded = encode_route_with(route, request.max_points)?;
    let results = search.search_along_route(&encoded, &request.query, request.max_results, route)?;
    let total = results.len();
    let places = if filter.is_unconstrained() {
        results
    } else {
        filter.apply(&results)
    };

    tracing::info!(total, shown = places.len(), "Route search complete");
    Ok(ScoutReport { total, places })
}
