use geo::Point;
use serde::Serialize;

use clearway_geo::LatLng;

/// Route search towards a free-text destination, geocoded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRouteRequest {
    pub device_id: String,
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_address: String,
}

impl AddressRouteRequest {
    pub fn new(device_id: impl Into<String>, start: Point, end_address: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            start_latitude: start.latitude(),
            start_longitude: start.longitude(),
            end_address: end_address.into(),
        }
    }
}

/// Route search between two known coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvoidanceRouteRequest {
    pub device_id: String,
    pub start_latitude: f64,
    pub start_longitude: f64,
    pub end_latitude: f64,
    pub end_longitude: f64,
}

impl AvoidanceRouteRequest {
    pub fn new(device_id: impl Into<String>, start: Point, end: Point) -> Self {
        Self {
            device_id: device_id.into(),
            start_latitude: start.latitude(),
            start_longitude: start.longitude(),
            end_latitude: end.latitude(),
            end_longitude: end.longitude(),
        }
    }
}
