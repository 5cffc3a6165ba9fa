pub mod client;
pub mod error;
pub mod transport;

pub use client::{GeocodeClient, GeocodeResult};
pub use error::GeocodeError;
pub use transport::{HttpResponse, HttpTransport, Transport};
