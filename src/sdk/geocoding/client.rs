use super::error::GeocodeError;
use super::transport::{HttpTransport, Transport};
use crate::sdk::config::GeocodeConfig;
use serde_json::Value;

/// Outcome of a reverse-geocoding lookup that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeResult {
    /// HTTP 200. The document is exactly what the API returned.
    Found(Value),
    /// Any status other than 200.
    NoResult { status: u16 },
}

impl GeocodeResult {
    pub fn is_found(&self) -> bool {
        matches!(self, GeocodeResult::Found(_))
    }

    pub fn document(&self) -> Option<&Value> {
        match self {
            GeocodeResult::Found(doc) => Some(doc),
            GeocodeResult::NoResult { .. } => None,
        }
    }

    pub fn into_document(self) -> Option<Value> {
        match self {
            GeocodeResult::Found(doc) => Some(doc),
            GeocodeResult::NoResult { .. } => None,
        }
    }

    /// The API's own `status` field (`"OK"`, `"ZERO_RESULTS"`, ...), if present.
    pub fn api_status(&self) -> Option<&str> {
        self.document()?.get("status")?.as_str()
    }

    pub fn formatted_addresses(&self) -> Vec<&str> {
        self.document()
            .and_then(|doc| doc.get("results"))
            .and_then(Value::as_array)
            .map(|results| {
                results
                    .iter()
                    .filter_map(|r| r.get("formatted_address").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub struct GeocodeClient {
    transport: Box<dyn Transport>,
    config: GeocodeConfig,
}

impl GeocodeClient {
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }

    pub fn with_transport(config: GeocodeConfig, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            config,
        }
    }

    pub fn config(&self) -> &GeocodeConfig {
        &self.config
    }

    /// Reverse-geocodes a coordinate with a single GET request.
    ///
    /// Only the HTTP status is inspected: 200 yields the parsed body, anything
    /// else yields [`GeocodeResult::NoResult`]. Transport failures and
    /// unparseable 200 bodies are returned as errors.
    pub fn lookup(&self, lat: f64, lng: f64) -> Result<GeocodeResult, GeocodeError> {
        let latlng = format!("{},{}", lat, lng);
        log::debug!("[GEOCODE] Reverse lookup for latlng={}", latlng);

        let query = [("latlng", latlng.as_str()), ("key", self.config.api_key.as_str())];
        let response = self.transport.get(&self.config.base_url, &query)?;

        if response.status != 200 {
            log::warn!(
                "Geocoding API returned status {} for latlng={}",
                response.status,
                latlng
            );
            return Ok(GeocodeResult::NoResult {
                status: response.status,
            });
        }

        let document: Value = serde_json::from_str(&response.body).map_err(|e| {
            log::error!(
                "Failed to parse geocoding response for latlng={}\nError: {}. Body: {}",
                latlng,
                e,
                response.body
            );
            e
        })?;

        Ok(GeocodeResult::Found(document))
    }
}
