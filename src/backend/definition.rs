use chrono::{DateTime, NaiveDateTime};
use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use clearway_geo::{lat_lng, LatLng};

use crate::route::lenient;
use crate::voice::VoiceSettings;
use crate::Error;

/// Every backend response is wrapped as `{ "result": ..., "message": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn into_result(self, status: u16) -> Result<T, Error> {
        self.result.ok_or_else(|| Error::Backend {
            status,
            message: self
                .message
                .unwrap_or_else(|| "response carried no result".to_string()),
        })
    }
}

/// A designated smoking area, as drawn on the map.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmokingArea {
    #[serde(default, alias = "areaId", alias = "smokingAreaId", deserialize_with = "lenient::identifier")]
    pub id: Option<String>,
    #[serde(default, alias = "areaName", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub longitude: Option<f64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SmokingArea {
    pub fn position(&self) -> Option<Point> {
        Some(lat_lng(self.latitude?, self.longitude?))
    }
}

/// A complaint previously filed from this device.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default, alias = "id", deserialize_with = "lenient::identifier")]
    pub report_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub reported_latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub reported_longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(default, alias = "reportedAt", deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

impl Report {
    pub fn position(&self) -> Option<Point> {
        Some(lat_lng(self.reported_latitude?, self.reported_longitude?))
    }

    /// The filing time as the server wrote it (wall clock, offset dropped).
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let raw = self.created_at.as_deref()?.trim();

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.naive_local());
        }

        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }
}

/// A new complaint about the smoking area at the user's position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub device_id: String,
    pub reported_latitude: f64,
    pub reported_longitude: f64,
    pub description: String,
}

impl NewReport {
    pub fn new(device_id: impl Into<String>, position: Point, description: impl Into<String>) -> Self {
        NewReport {
            device_id: device_id.into(),
            reported_latitude: position.latitude(),
            reported_longitude: position.longitude(),
            description: description.into(),
        }
    }
}

/// Speech parameters stored against the device on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicePreferences {
    pub voice_rate: f32,
    pub voice_pitch: f32,
}

impl From<&VoiceSettings> for VoicePreferences {
    fn from(settings: &VoiceSettings) -> Self {
        VoicePreferences {
            voice_rate: settings.rate,
            voice_pitch: settings.pitch,
        }
    }
}
