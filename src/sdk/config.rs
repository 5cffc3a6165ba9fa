use std::env;

pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const BASE_URL_VAR: &str = "GEOCODE_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Credentials and endpoint for the reverse-geocoding client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeConfig {
    pub api_key: String,
    pub base_url: String,
}

impl GeocodeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// A missing API key is not an error here: the key is left empty and the
    /// remote service rejects the first request.
    pub fn from_env() -> Self {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).unwrap_or_else(|| {
            log::warn!("{} is not set, geocoding requests will be rejected", API_KEY_VAR);
            String::new()
        });
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { api_key, base_url }
    }
}
