use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use clearway_geo::BoundingBox;

use crate::backend::{Backend, Envelope, NewReport, Report, SmokingArea, VoicePreferences};
use crate::nlu::NluResult;
use crate::route::{AddressRouteRequest, AvoidanceRouteRequest, RouteData};
use crate::{Config, Error};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommandRequest<'a> {
    command_text: &'a str,
}

/// The REST backend.
///
/// Requests carry no timeout unless one is configured.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpBackend {
            base_url: base_url.into(),
            client: builder.build()?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::with_timeout(config.backend_url.clone(), config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let (status, body) = self.send(request).await?;
        decode(status, &body)
    }

    async fn submit(&self, request: RequestBuilder) -> Result<(), Error> {
        let (status, body) = self.send(request).await?;
        check(status, &body)
    }

    async fn send(&self, request: RequestBuilder) -> Result<(u16, Vec<u8>), Error> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        debug!("{} answered {status}", response.url());

        let body = response.bytes().await?;
        Ok((status, body.to_vec()))
    }
}

/// Fails on a non-success status, using the body's `message` when present.
pub(crate) fn check(status: u16, body: &[u8]) -> Result<(), Error> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let message = serde_json::from_slice::<Envelope<Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| format!("request failed with status {status}"));

    warn!("Backend rejected request ({status}): {message}");
    Err(Error::Backend { status, message })
}

/// Unwraps the `result` of a successful response.
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, Error> {
    check(status, body)?;
    serde_json::from_slice::<Envelope<T>>(body)?.into_result(status)
}

impl Backend for HttpBackend {
    async fn init_device(&self, device_id: &str) -> Result<(), Error> {
        let request = self
            .client
            .post(self.url("device/init"))
            .query(&[("deviceId", device_id)]);

        self.submit(request).await
    }

    async fn update_voice_preferences(
        &self,
        device_id: &str,
        preferences: &VoicePreferences,
    ) -> Result<(), Error> {
        let request = self
            .client
            .patch(self.url(&format!("device/{device_id}/preferences")))
            .json(preferences);

        self.submit(request).await
    }

    async fn find_route_by_address(&self, request: &AddressRouteRequest) -> Result<RouteData, Error> {
        self.fetch(self.client.post(self.url("routes/address")).json(request))
            .await
    }

    async fn find_avoidance_route(&self, request: &AvoidanceRouteRequest) -> Result<RouteData, Error> {
        self.fetch(self.client.post(self.url("routes/avoidance")).json(request))
            .await
    }

    async fn smoking_areas(&self, bounds: &BoundingBox) -> Result<Vec<SmokingArea>, Error> {
        let request = self.client.get(self.url("smoking/areas")).query(&[
            ("min_lat", bounds.min_lat),
            ("max_lat", bounds.max_lat),
            ("min_lng", bounds.min_lng),
            ("max_lng", bounds.max_lng),
        ]);

        self.fetch(request).await
    }

    async fn parse_command(&self, command: &str) -> Result<NluResult, Error> {
        let request = self
            .client
            .post(self.url("nlu/command"))
            .json(&CommandRequest { command_text: command });

        self.fetch(request).await
    }

    async fn my_reports(&self, device_id: &str) -> Result<Vec<Report>, Error> {
        self.fetch(self.client.get(self.url(&format!("reports/device/{device_id}"))))
            .await
    }

    async fn create_report(&self, report: &NewReport) -> Result<(), Error> {
        self.submit(self.client.post(self.url("reports")).json(report))
            .await
    }
}
