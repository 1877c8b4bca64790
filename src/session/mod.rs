//! Ties the device, the live location, the navigator and the backend
//! together behind the operations a user can trigger by voice or touch.

use std::sync::Arc;

use geo::Point;
use log::{debug, info, warn};
use uuid::Uuid;

use clearway_geo::{BoundingBox, LatLng};

use crate::backend::{Backend, NewReport, Report, SmokingArea, VoicePreferences};
use crate::guidance::{build_guidance_steps, build_summary_text, Locale};
use crate::navigator::{Navigator, Proximity, ProximityTrigger};
use crate::nlu::Intent;
use crate::route::{AddressRouteRequest, AvoidanceRouteRequest, RouteData};
use crate::voice::{announce, VoiceOutput, VoiceSettings};
use crate::{Config, Error};


/// What a spoken command resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A route was found and guidance started.
    Routed { destination: String },
    ReportAcknowledged,
    NotUnderstood,
}

pub struct Session<B: Backend> {
    backend: B,
    voice: Arc<dyn VoiceOutput>,
    locale: Locale,
    scan_buffer: f64,
    voice_settings: VoiceSettings,

    navigator: Navigator,
    trigger: ProximityTrigger,

    device_id: Option<String>,
    location: Option<Point>,
    destination: Option<String>,
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B, voice: Arc<dyn VoiceOutput>, config: &Config) -> Self {
        Session {
            navigator: Navigator::new(Arc::clone(&voice), config.navigator()),
            trigger: ProximityTrigger::new(),
            backend,
            voice,
            locale: config.locale,
            scan_buffer: config.scan_buffer,
            voice_settings: config.voice.clone(),
            device_id: None,
            location: None,
            destination: None,
        }
    }

    /// Registers the device with the backend, generating a fresh id when
    /// none was stored. A failed registration is logged and the id kept,
    /// later calls may still succeed.
    pub async fn init_device(&mut self, stored: Option<String>) -> &str {
        let device_id = stored
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| {
                let id = Uuid::new_v4().to_string();
                info!("No stored device id, generated {id}");
                id
            });

        match self.backend.init_device(&device_id).await {
            Ok(()) => info!("Registered device {device_id}"),
            Err(err) => warn!("Could not register device {device_id}: {err}"),
        }

        self.device_id.insert(device_id).as_str()
    }

    /// Feeds a live location to the proximity trigger.
    pub fn update_location(&mut self, location: Point) -> Proximity {
        if !location.is_finite() {
            debug!("Ignoring non-finite location {location:?}");
            return Proximity::Idle;
        }

        self.location = Some(location);
        self.trigger.observe(location, &mut self.navigator)
    }

    /// Finds a route from the current location to a free-text address and
    /// starts guidance along it.
    pub async fn search_destination(&mut self, destination: &str) -> Result<(), Error> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(Error::MissingDestination);
        }

        let start = self.location.ok_or(Error::MissingLocation)?;
        let device_id = self.device_id.as_deref().ok_or(Error::MissingDevice)?;

        info!("Searching route to {destination:?}");
        let request = AddressRouteRequest::new(device_id, start, destination);
        let route = self.backend.find_route_by_address(&request).await?;

        self.start_guidance(route, destination);
        Ok(())
    }

    /// Finds a route from the current location to a known coordinate.
    pub async fn search_coordinates(&mut self, end: Point, label: &str) -> Result<(), Error> {
        let start = self.location.ok_or(Error::MissingLocation)?;
        let device_id = self.device_id.as_deref().ok_or(Error::MissingDevice)?;

        let request = AvoidanceRouteRequest::new(device_id, start, end);
        let route = self.backend.find_avoidance_route(&request).await?;

        self.start_guidance(route, label);
        Ok(())
    }

    fn start_guidance(&mut self, route: RouteData, destination: &str) {
        let label = Some(destination).filter(|label| !label.trim().is_empty());
        let steps = build_guidance_steps(&route, self.locale);
        let summary = build_summary_text(&route, label, self.locale);

        self.navigator.load_route(route, steps);
        self.destination = label.map(str::to_string);

        announce(self.voice.as_ref(), &summary);
    }

    /// Stops guidance and silences the voice.
    pub fn stop_guidance(&mut self) {
        self.navigator.clear_route();
        self.trigger.reset();
        self.destination = None;
    }

    /// Interprets a spoken command and acts on it.
    pub async fn handle_command(&mut self, command: &str) -> Result<CommandOutcome, Error> {
        let command = command.trim();
        if command.is_empty() {
            announce(self.voice.as_ref(), self.locale.not_understood());
            return Ok(CommandOutcome::NotUnderstood);
        }

        if self.location.is_none() {
            announce(self.voice.as_ref(), self.locale.missing_location());
            return Err(Error::MissingLocation);
        }

        if self.device_id.is_none() {
            announce(self.voice.as_ref(), self.locale.missing_device());
            return Err(Error::MissingDevice);
        }

        let intent = Intent::from(self.backend.parse_command(command).await?);
        debug!("Command {command:?} resolved to {intent:?}");

        match intent {
            Intent::SearchRoute {
                destination: Some(destination),
            } => {
                self.search_destination(&destination).await?;
                Ok(CommandOutcome::Routed { destination })
            }
            Intent::ReportSmoking => {
                announce(self.voice.as_ref(), self.locale.complaint_noted());
                Ok(CommandOutcome::ReportAcknowledged)
            }
            Intent::SearchRoute { destination: None } | Intent::Unknown(_) => {
                announce(self.voice.as_ref(), self.locale.not_understood());
                Ok(CommandOutcome::NotUnderstood)
            }
        }
    }

    /// Files a report at the current location. Both the outcome and any
    /// missing precondition are spoken.
    pub async fn submit_report(&mut self, description: &str) -> Result<(), Error> {
        let description = description.trim();
        if description.is_empty() {
            announce(self.voice.as_ref(), self.locale.missing_description());
            return Err(Error::MissingDescription);
        }

        let Some(location) = self.location else {
            announce(self.voice.as_ref(), self.locale.missing_location());
            return Err(Error::MissingLocation);
        };

        let Some(device_id) = self.device_id.as_deref() else {
            announce(self.voice.as_ref(), self.locale.missing_device());
            return Err(Error::MissingDevice);
        };

        let report = NewReport::new(device_id, location, description);
        match self.backend.create_report(&report).await {
            Ok(()) => {
                announce(self.voice.as_ref(), self.locale.report_received());
                Ok(())
            }
            Err(err) => {
                warn!("Report submission failed: {err}");
                announce(self.voice.as_ref(), self.locale.report_failed());
                Err(err)
            }
        }
    }

    pub async fn my_reports(&self) -> Result<Vec<Report>, Error> {
        let device_id = self.device_id.as_deref().ok_or(Error::MissingDevice)?;
        self.backend.my_reports(device_id).await
    }

    /// Lists the smoking areas around the current location.
    pub async fn scan_nearby(&mut self) -> Result<Vec<SmokingArea>, Error> {
        let Some(location) = self.location else {
            announce(self.voice.as_ref(), self.locale.locating());
            return Err(Error::MissingLocation);
        };

        let bounds = BoundingBox::around(location, self.scan_buffer)?;
        announce(self.voice.as_ref(), self.locale.rescanning());

        let areas = self.backend.smoking_areas(&bounds).await?;
        debug!(
            "Found {} smoking areas around ({:.5}, {:.5})",
            areas.len(),
            location.latitude(),
            location.longitude()
        );

        Ok(areas)
    }

    pub fn voice_settings(&self) -> &VoiceSettings {
        &self.voice_settings
    }

    /// Changes the speech rate locally, then syncs it to the backend.
    pub async fn set_voice_rate(&mut self, rate: f32) {
        if !rate.is_finite() || rate <= 0.0 {
            warn!("Ignoring invalid voice rate {rate}");
            return;
        }

        self.voice_settings.rate = rate;
        self.sync_voice_settings().await;
    }

    /// Changes the speech pitch locally, then syncs it to the backend.
    pub async fn set_voice_pitch(&mut self, pitch: f32) {
        if !pitch.is_finite() || pitch <= 0.0 {
            warn!("Ignoring invalid voice pitch {pitch}");
            return;
        }

        self.voice_settings.pitch = pitch;
        self.sync_voice_settings().await;
    }

    /// Restores the default rate and pitch. The language is kept.
    pub async fn reset_voice_settings(&mut self) {
        let defaults = VoiceSettings::default();
        self.voice_settings.rate = defaults.rate;
        self.voice_settings.pitch = defaults.pitch;
        self.sync_voice_settings().await;
    }

    /// Local settings stay in effect when the backend cannot be reached.
    async fn sync_voice_settings(&self) {
        let Some(device_id) = self.device_id.as_deref() else {
            debug!("No device registered, voice settings kept locally");
            return;
        };

        let preferences = VoicePreferences::from(&self.voice_settings);
        if let Err(err) = self
            .backend
            .update_voice_preferences(device_id, &preferences)
            .await
        {
            warn!("Could not sync voice settings: {err}");
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn location(&self) -> Option<Point> {
        self.location
    }

    /// The destination of the route being guided, if any.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
