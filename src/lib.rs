//! route-scout core
//!
//! Finds places matching a text query along a GPX or KML route.

pub mod error;
pub mod route;
pub mod parser;
pub mod geometry;
pub mod compress;
pub mod assemble;
pub mod traits;
pub mod places;
pub mod filter;
pub mod scout;
pub mod config;

pub use error::{Result, ScoutError};
pub use route::{Coordinate, Route};
