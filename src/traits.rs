//! Seam between route handling and the external place search service.
//!
//! `PlacesClient` is the production implementation; tests substitute stubs.

use crate::assemble::PlaceResult;
use crate::compress::EncodedRoute;
use crate::error::Result;
use crate::route::Route;

/// Searches for places along an encoded route corridor.
///
/// Results keep the order returned by the service. `route` is the original,
/// unencoded route used to compute each result's distance.
pub trait PlaceSearch {
    fn search_along_route(
        &self,
        encoded: &EncodedRoute,
        query: &str,
        max_results: u32,
        route: &Route,
    ) -> Result<Vec<PlaceResult>>;
}
