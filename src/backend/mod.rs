//! The route backend.
//!
//! [`Backend`] is the seam between the guidance session and the REST service
//! that finds routes, lists smoking areas, interprets spoken commands and
//! stores reports. [`HttpBackend`] talks to the real service over HTTP.

use std::future::Future;

use clearway_geo::BoundingBox;

use crate::nlu::NluResult;
use crate::route::{AddressRouteRequest, AvoidanceRouteRequest, RouteData};
use crate::Error;

#[doc(hidden)]
pub mod definition;

#[cfg(feature = "client")]
#[doc(hidden)]
pub mod client;


#[doc(inline)]
pub use definition::{Envelope, NewReport, Report, SmokingArea, VoicePreferences};

#[cfg(feature = "client")]
#[doc(inline)]
pub use client::HttpBackend;

pub trait Backend: Send + Sync {
    /// Registers the device so later calls can refer to it.
    fn init_device(&self, device_id: &str) -> impl Future<Output = Result<(), Error>> + Send;

    fn update_voice_preferences(
        &self,
        device_id: &str,
        preferences: &VoicePreferences,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// Finds a walking route to a free-text destination address.
    fn find_route_by_address(
        &self,
        request: &AddressRouteRequest,
    ) -> impl Future<Output = Result<RouteData, Error>> + Send;

    /// Finds a walking route between two coordinates avoiding smoking areas.
    fn find_avoidance_route(
        &self,
        request: &AvoidanceRouteRequest,
    ) -> impl Future<Output = Result<RouteData, Error>> + Send;

    fn smoking_areas(
        &self,
        bounds: &BoundingBox,
    ) -> impl Future<Output = Result<Vec<SmokingArea>, Error>> + Send;

    /// Interprets a spoken command.
    fn parse_command(&self, command: &str) -> impl Future<Output = Result<NluResult, Error>> + Send;

    fn my_reports(&self, device_id: &str) -> impl Future<Output = Result<Vec<Report>, Error>> + Send;

    fn create_report(&self, report: &NewReport) -> impl Future<Output = Result<(), Error>> + Send;
}
