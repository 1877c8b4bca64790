use geo::{Point, point};

/// Builds a point from a latitude/longitude pair, in that order.
///
/// ```rust
/// use clearway_geo::{lat_lng, LatLng};
/// let city_hall = lat_lng(37.5665, 126.9780);
/// assert_eq!(city_hall.latitude(), 37.5665);
/// assert_eq!(city_hall.x(), 126.9780);
/// ```
pub fn lat_lng(lat: f64, lng: f64) -> Point {
    point! { x: lng, y: lat }
}

/// Latitude/longitude accessors for a [`geo::Point`].
pub trait LatLng {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;

    /// Whether both components are finite numbers.
    fn is_finite(&self) -> bool {
        self.latitude().is_finite() && self.longitude().is_finite()
    }
}

impl LatLng for Point {
    #[inline]
    fn latitude(&self) -> f64 {
        self.y()
    }

    #[inline]
    fn longitude(&self) -> f64 {
        self.x()
    }
}
