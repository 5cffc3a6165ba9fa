use super::error::GeocodeError;
use reqwest::blocking::Client;
use std::time::Duration;

/// Status line and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub trait Transport: Send + Sync {
    /// Issues a single GET with the given query parameters.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, GeocodeError>;
}

/// Blocking `reqwest` transport with no timeout.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, GeocodeError> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, GeocodeError> {
        let response = match self.client.get(url).query(query).send() {
            Ok(resp) => resp,
            Err(e) => {
                let err = GeocodeError::from(e);
                log::error!("Failed to send GET request. URL: {}\nError: {}", url, err);
                return Err(err);
            }
        };

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}
