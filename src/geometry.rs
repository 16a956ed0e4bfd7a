//! Great-circle distances between places and routes.
//!
//! Distances use the haversine formula on a spherical Earth. Distance to a
//! route is measured against a sampled subset of its vertices, not against
//! the segments between them, so it overestimates for places beside the
//! middle of a long straight leg.

use crate::route::{Coordinate, Route};

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Routes are sampled down to roughly this many vertices for distance checks.
const ROUTE_SAMPLE_TARGET: usize = 100;

/// Calculate haversine distance between two points in meters.
pub fn great_circle_distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Stride between sampled vertices for a route of `len` points.
pub fn sampling_stride(len: usize) -> usize {
    (len / ROUTE_SAMPLE_TARGET).max(1)
}

/// Minimum distance in meters from `point` to every `sampling_stride`-th vertex of `route`.
///
/// Returns `None` for an empty route.
pub fn distance_from_route(point: Coordinate, route: &Route) -> Option<f64> {
    let step = sampling_stride(route.len());
    route
        .points()
        .iter()
        .step_by(step)
        .map(|vertex| great_circle_distance(point, *vertex))
        .min_by(f64::total_cmp)
}
