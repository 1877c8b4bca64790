use geo::Point;

use crate::coord::LatLng;
use crate::error::GeoError;

/// An axis-aligned latitude/longitude window, as used by the smoking-area
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// A square window of `buffer` degrees on each side of `center`.
    pub fn around(center: Point, buffer: f64) -> Result<Self, GeoError> {
        if !center.is_finite() {
            return Err(GeoError::InvalidCoordinate(format!(
                "Center must be finite. Given: ({}, {})",
                center.latitude(),
                center.longitude()
            )));
        }

        if !(buffer.is_finite() && buffer > 0.0) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Buffer must be a positive number of degrees. Given: {buffer}"
            )));
        }

        Ok(BoundingBox {
            min_lat: center.latitude() - buffer,
            max_lat: center.latitude() + buffer,
            min_lng: center.longitude() - buffer,
            max_lng: center.longitude() + buffer,
        })
    }

    pub fn contains(&self, point: &Point) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.latitude())
            && (self.min_lng..=self.max_lng).contains(&point.longitude())
    }
}
