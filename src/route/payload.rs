use geo::Point;
use serde::Deserialize;
use serde_json::{Map, Value};

use clearway_geo::lat_lng;

use crate::route::lenient;
use crate::Error;

/// One turn instruction as the route service sends it.
///
/// Every field is optional and decoded leniently, see [`lenient`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInstruction {
    #[serde(default, deserialize_with = "lenient::number")]
    pub distance_meters: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub distance_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub maneuver: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub street_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub road: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,
}

impl RawInstruction {
    /// The explicit anchor of this instruction, if both components were sent.
    pub fn coordinate(&self) -> Option<Point> {
        Some(lat_lng(self.latitude?, self.longitude?))
    }

    pub fn street(&self) -> Option<&str> {
        self.street_name.as_deref().or(self.road.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    #[serde(default, deserialize_with = "lenient::text")]
    pub distance_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration_text: Option<String>,
}

/// The route service response.
///
/// Only the fields guidance needs are typed; everything else the backend
/// sends is retained in [`RouteData::extra`] for rendering.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    #[serde(default, deserialize_with = "lenient::list")]
    pub voice_instructions: Vec<RawInstruction>,
    #[serde(default, deserialize_with = "lenient::path")]
    pub path_coordinates: Vec<Point>,

    #[serde(default, deserialize_with = "lenient::object")]
    pub summary: Option<RouteSummary>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub distance_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub total_distance_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub total_duration_text: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub avoided_areas_count: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RouteData {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    /// Total distance label, whichever key the backend used for it.
    pub fn total_distance(&self) -> Option<&str> {
        self.summary
            .as_ref()
            .and_then(|summary| summary.distance_text.as_deref())
            .or(self.distance_text.as_deref())
            .or(self.total_distance_text.as_deref())
    }

    /// Total duration label, whichever key the backend used for it.
    pub fn total_duration(&self) -> Option<&str> {
        self.summary
            .as_ref()
            .and_then(|summary| summary.duration_text.as_deref())
            .or(self.duration_text.as_deref())
            .or(self.total_duration_text.as_deref())
    }

    pub fn avoided_areas(&self) -> u32 {
        self.avoided_areas_count.unwrap_or(0)
    }

    /// The last point of the path.
    pub fn destination(&self) -> Option<Point> {
        self.path_coordinates.last().copied()
    }
}
