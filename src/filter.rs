//! Result filtering by rating, price, open status, and distance.
//!
//! Each constraint is independent; a place is kept only if it passes all of
//! them. Missing price and distance data pass, while missing rating and
//! open status fail whenever their constraint is active.

use std::collections::HashSet;

use crate::assemble::{PlaceResult, PriceTier};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceFilter {
    /// Minimum rating; `0.0` disables the check.
    pub min_rating: f64,
    /// Allowed price tiers; empty disables the check.
    pub prices: HashSet<PriceTier>,
    /// Keep only places known to be open right now.
    pub open_now: bool,
    /// Maximum distance from the route in miles.
    pub max_distance_mi: Option<f64>,
}

impl PlaceFilter {
    /// True when no constraint is active, so every place passes.
    pub fn is_unconstrained(&self) -> bool {
        self.min_rating <= 0.0
            && self.prices.is_empty()
            && !self.open_now
            && self.max_distance_mi.is_none()
    }

    pub fn matches(&self, place: &PlaceResult) -> bool {
        self.rating_ok(place) && self.price_ok(place) && self.open_ok(place) && self.distance_ok(place)
    }

    /// Keep matching places in their original order.
    pub fn apply(&self, places: &[PlaceResult]) -> Vec<PlaceResult> {
        let kept: Vec<PlaceResult> = places.iter().filter(|p| self.matches(p)).cloned().collect();
        tracing::debug!(total = places.len(), kept = kept.len(), "Filtered places");
        kept
    }

    fn rating_ok(&self, place: &PlaceResult) -> bool {
        if self.min_rating <= 0.0 {
            return true;
        }
        place.rating.is_some_and(|rating| rating >= self.min_rating)
    }

    fn price_ok(&self, place: &PlaceResult) -> bool {
        self.prices.is_empty() || !place.price.is_known() || self.prices.contains(&place.price)
    }

    fn open_ok(&self, place: &PlaceResult) -> bool {
        !self.open_now || place.open_now == Some(true)
    }

    fn distance_ok(&self, place: &PlaceResult) -> bool {
        match (self.max_distance_mi, place.distance_mi) {
            (Some(max), Some(mi)) => mi <= max,
            _ => true,
        }
    }
}
