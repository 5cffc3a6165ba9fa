use super::coordinate::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points, using the haversine formula.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial compass bearing in degrees, in `[0, 360)`, from the first point toward the second.
///
/// This is the heading at the start of the great-circle path, not the reciprocal of
/// the bearing from the second point back. For the reverse heading add 180 and
/// re-normalize. Identical points give 0.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let x = dlon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    let initial = x.atan2(y).to_degrees();
    (initial + 360.0) % 360.0
}

/// Point reached by travelling `distance_km` from `(lat1, lon1)` along the great
/// circle with initial heading `bearing_deg`.
///
/// The returned longitude is `lon1` plus the angular offset and is not wrapped into
/// `[-180, 180]`; use [`wrap_longitude`] when a canonical value is needed.
pub fn project(lat1: f64, lon1: f64, distance_km: f64, bearing_deg: f64) -> Coordinate {
    let bearing = bearing_deg.to_radians();
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    // NaN if rounding pushes the argument outside [-1, 1]
    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Maps a longitude in degrees into `[-180, 180)`.
pub fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
