//! Closed-form spherical geometry on a mean-radius Earth.
pub mod coordinate;
pub mod formulas;

pub use coordinate::{Coordinate, CoordinateError};
pub use formulas::{bearing, distance, project, wrap_longitude, EARTH_RADIUS_KM};
