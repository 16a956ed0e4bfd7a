//! Route representation for parsed track geometries.
//!
//! A route is the ordered list of coordinates read from a track file. The
//! order is the traversal order of the original track and defines the start
//! and end of the route.

use serde::{Deserialize, Serialize};

/// Minimum number of points a route needs before it can be searched along.
pub const MIN_ROUTE_POINTS: usize = 2;

/// A WGS-84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// An ordered, immutable sequence of coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    /// Creates a new Route from coordinates in traversal order.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Coordinate> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.points.last()
    }

    /// Whether the route has enough points to be encoded and measured against.
    pub fn meets_minimum(&self) -> bool {
        self.points.len() >= MIN_ROUTE_POINTS
    }
}

impl From<Vec<(f64, f64)>> for Route {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Coordinate::from).collect())
    }
}
