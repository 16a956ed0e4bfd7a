//! Configuration loaded from the environment.
//!
//! A `.env` file in the working directory is read first if present.

use std::env;

use crate::error::{Result, ScoutError};
use crate::places::{PlacesConfig, DEFAULT_PLACES_URL};

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const PLACES_URL_VAR: &str = "ROUTE_SCOUT_PLACES_URL";
pub const TIMEOUT_VAR: &str = "ROUTE_SCOUT_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub places: PlacesConfig,
}

impl ScoutConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ScoutError::MissingCredential)?;

        let base_url = lookup(PLACES_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PLACES_URL.to_string());

        let timeout_secs = lookup(TIMEOUT_VAR)
            .map(|v| {
                v.trim()
                    .parse::<u64>()
                    .map_err(|_| ScoutError::Config(format!("{} must be a whole number of seconds", TIMEOUT_VAR)))
            })
            .transpose()?;

        Ok(Self {
            places: PlacesConfig {
                base_url,
                api_key,
                timeout_secs,
            },
        })
    }
}
