use geo::Point;

use crate::EARTH_RADIUS;
use crate::coord::LatLng;

/// Great-circle distance in meters between two latitude/longitude pairs.
///
/// Any non-finite argument yields [`f64::INFINITY`], so a malformed
/// coordinate can never be considered "within range" of anything.
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if ![lat1, lon1, lat2, lon2].iter().all(|v| v.is_finite()) {
        return f64::INFINITY;
    }

    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS * c
}

/// [`distance_meters`] over two points.
#[inline]
pub fn haversine(lhs: &Point, rhs: &Point) -> f64 {
    distance_meters(lhs.latitude(), lhs.longitude(), rhs.latitude(), rhs.longitude())
}
