//! Downsampling and polyline encoding of routes for transmission.
//!
//! The place search service limits how long a corridor polyline may be, so
//! routes above `DEFAULT_MAX_POINTS` are thinned by even index selection
//! before being encoded. The route's final point is always kept.

use geo_types::Coord;
use serde::Serialize;

use crate::error::{Result, ScoutError};
use crate::route::{Coordinate, Route};

/// Largest number of points sent to the search service by default.
pub const DEFAULT_MAX_POINTS: usize = 500;

/// Decimal digits kept by the polyline encoding.
pub const POLYLINE_PRECISION: u32 = 5;

/// A compact polyline string, only meaningful to the search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodedRoute(String);

impl EncodedRoute {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Select at most `max_points` coordinates by evenly spaced index.
///
/// Indices are `i * (n - 1) / (max_points - 1)` for `i < max_points - 1`,
/// followed by the last index. A `max_points` below 2 is treated as 2.
pub fn downsample(points: &[Coordinate], max_points: usize) -> Vec<Coordinate> {
    let max_points = max_points.max(2);
    let n = points.len();
    if n <= max_points {
        return points.to_vec();
    }

    let span = n - 1;
    let slots = max_points - 1;
    (0..slots)
        .map(|i| i * span / slots)
        .chain(std::iter::once(span))
        .filter_map(|idx| points.get(idx).copied())
        .collect()
}

/// Downsample to `DEFAULT_MAX_POINTS` and encode.
pub fn encode_route(route: &Route) -> Result<EncodedRoute> {
    encode_route_with(route, DEFAULT_MAX_POINTS)
}

/// Downsample to `max_points` and encode as a precision-5 polyline.
pub fn encode_route_with(route: &Route, max_points: usize) -> Result<EncodedRoute> {
    let sampled = downsample(route.points(), max_points);
    if sampled.len() < route.len() {
        tracing::debug!(
            original = route.len(),
            sampled = sampled.len(),
            "Downsampled route for transmission"
        );
    }

    // Polyline coordinates are x = longitude, y = latitude.
    let coords = sampled.iter().map(|c| Coord { x: c.lon, y: c.lat });
    let encoded = polyline::encode_coordinates(coords, POLYLINE_PRECISION)
        .map_err(|err| ScoutError::Encode(err.to_string()))?;

    Ok(EncodedRoute(encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Coordinate> {
        (0..n)
            .map(|i| Coordinate::new(30.0 + i as f64 * 0.0001, -97.0))
            .collect()
    }

    #[test]
    fn test_short_route_untouched() {
        let points = line(500);
        assert_eq!(downsample(&points, 500), points);
    }

    #[test]
    fn test_downsample_exact_count_and_endpoints() {
        let points = line(1234);
        let sampled = downsample(&points, 500);
        assert_eq!(sampled.len(), 500);
        assert_eq!(sampled.first(), points.first());
        assert_eq!(sampled.last(), points.last());
    }

    #[test]
    fn test_downsample_indices() {
        let points = line(10);
        let sampled = downsample(&points, 4);
        // 0*9/3, 1*9/3, 2*9/3, then the last index
        let expected = vec![points[0], points[3], points[6], points[9]];
        assert_eq!(sampled, expected);
    }

    #[test]
    fn test_downsample_keeps_last_when_stride_misses_it() {
        let points = line(11);
        let sampled = downsample(&points, 4);
        // 0, 10/3 = 3, 20/3 = 6, then 10
        let expected = vec![points[0], points[3], points[6], points[10]];
        assert_eq!(sampled, expected);
    }

    #[test]
    fn test_tiny_ceiling_raised_to_two() {
        let points = line(5);
        let sampled = downsample(&points, 1);
        assert_eq!(sampled, vec![points[0], points[4]]);
    }

    #[test]
    fn test_encode_known_polyline() {
        // Reference example from the polyline format documentation.
        let route = Route::from(vec![(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]);
        let encoded = encode_route(&route).unwrap();
        assert_eq!(encoded.as_str(), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    }

    #[test]
    fn test_encode_single_point() {
        let route = Route::from(vec![(38.5, -120.2)]);
        let encoded = encode_route(&route).unwrap();
        assert_eq!(encoded.as_str(), "_p~iF~ps|U");
    }

    #[test]
    fn test_encode_rejects_out_of_range_latitude() {
        let route = Route::from(vec![(95.0, 0.0), (96.0, 0.0)]);
        assert!(matches!(encode_route(&route), Err(ScoutError::Encode(_))));
    }
}
