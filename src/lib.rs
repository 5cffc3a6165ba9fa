pub mod sdk;

pub use sdk::config::GeocodeConfig;
pub use sdk::geocoding::{GeocodeClient, GeocodeError, GeocodeResult};
pub use sdk::geodesy::{bearing, distance, project, wrap_longitude, Coordinate, CoordinateError};
