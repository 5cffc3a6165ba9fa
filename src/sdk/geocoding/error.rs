use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodeError {
    /// DNS, connection or body read failure. Never retried.
    #[error("Geocoding request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    // Only raised for HTTP 200; other statuses never reach the parser
    #[error("Failed to parse geocoding response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

// reqwest errors carry the request URL, which includes the API key
impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Transport(Box::new(err.without_url()))
    }
}
