//! Test fixtures for route-scout.
//!
//! Provides:
//! - Sample GPX and KML route documents around Austin, TX
//! - A one-shot stub HTTP server standing in for the place search service

#![allow(dead_code)]

pub mod route_files;
pub mod stub_server;

pub use route_files::*;
pub use stub_server::*;
