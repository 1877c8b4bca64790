//! Runtime configuration, read from `CLEARWAY_*` environment variables.
//!
//! A `.env` file in the working directory is loaded first, so a local
//! setup can be kept out of the shell profile.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::debug;

use crate::guidance::Locale;
use crate::navigator::{NavigatorConfig, DEFAULT_ANNOUNCE_DELAY};
use crate::voice::VoiceSettings;
use crate::Error;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Half-width, in degrees, of the window queried for nearby smoking areas.
pub const DEFAULT_SCAN_BUFFER: f64 = 0.01;

pub const DEFAULT_SIMULATOR_TICK: Duration = Duration::from_millis(1000);

pub const BACKEND_URL: &str = "CLEARWAY_BACKEND_URL";
pub const LOCALE: &str = "CLEARWAY_LOCALE";
pub const ANNOUNCE_DELAY_MS: &str = "CLEARWAY_ANNOUNCE_DELAY_MS";
pub const VOICE_LANGUAGE: &str = "CLEARWAY_VOICE_LANGUAGE";
pub const VOICE_RATE: &str = "CLEARWAY_VOICE_RATE";
pub const VOICE_PITCH: &str = "CLEARWAY_VOICE_PITCH";
pub const SCAN_BUFFER: &str = "CLEARWAY_SCAN_BUFFER";
pub const REQUEST_TIMEOUT_MS: &str = "CLEARWAY_REQUEST_TIMEOUT_MS";
pub const SIMULATOR_TICK_MS: &str = "CLEARWAY_SIMULATOR_TICK_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub locale: Locale,
    pub announce_delay: Duration,
    pub voice: VoiceSettings,
    pub scan_buffer: f64,
    /// `None` leaves requests without a timeout.
    pub request_timeout: Option<Duration>,
    pub simulator_tick: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            locale: Locale::default(),
            announce_delay: DEFAULT_ANNOUNCE_DELAY,
            voice: VoiceSettings::default(),
            scan_buffer: DEFAULT_SCAN_BUFFER,
            request_timeout: None,
            simulator_tick: DEFAULT_SIMULATOR_TICK,
        }
    }
}

impl Config {
    /// Loads `.env` (if any), then reads the process environment.
    pub fn from_env() -> Result<Self, Error> {
        if let Ok(path) = dotenv::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key lookup. Unset or blank keys
    /// keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Config::default();

        let voice = VoiceSettings {
            language: value(VOICE_LANGUAGE).unwrap_or(defaults.voice.language),
            rate: positive(parse(VOICE_RATE, value(VOICE_RATE))?, VOICE_RATE)?
                .unwrap_or(defaults.voice.rate),
            pitch: positive(parse(VOICE_PITCH, value(VOICE_PITCH))?, VOICE_PITCH)?
                .unwrap_or(defaults.voice.pitch),
        };

        let scan_buffer = parse::<f64>(SCAN_BUFFER, value(SCAN_BUFFER))?;
        if let Some(buffer) = scan_buffer {
            if !buffer.is_finite() || buffer <= 0.0 {
                return Err(Error::Config(format!("{SCAN_BUFFER} must be positive, got {buffer}")));
            }
        }

        Ok(Config {
            backend_url: value(BACKEND_URL).unwrap_or(defaults.backend_url),
            locale: parse(LOCALE, value(LOCALE))?.unwrap_or(defaults.locale),
            announce_delay: millis(ANNOUNCE_DELAY_MS, value(ANNOUNCE_DELAY_MS))?
                .unwrap_or(defaults.announce_delay),
            voice,
            scan_buffer: scan_buffer.unwrap_or(defaults.scan_buffer),
            request_timeout: millis(REQUEST_TIMEOUT_MS, value(REQUEST_TIMEOUT_MS))?
                .filter(|timeout| !timeout.is_zero()),
            simulator_tick: millis(SIMULATOR_TICK_MS, value(SIMULATOR_TICK_MS))?
                .unwrap_or(defaults.simulator_tick),
        })
    }

    pub fn navigator(&self) -> NavigatorConfig {
        NavigatorConfig {
            announce_delay: self.announce_delay,
            locale: self.locale,
        }
    }
}

fn parse<T>(key: &str, value: Option<String>) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|err| Error::Config(format!("{key}={raw:?}: {err}")))
        })
        .transpose()
}

fn millis(key: &str, value: Option<String>) -> Result<Option<Duration>, Error> {
    Ok(parse::<u64>(key, value)?.map(Duration::from_millis))
}

fn positive(value: Option<f32>, key: &str) -> Result<Option<f32>, Error> {
    match value {
        Some(value) if !value.is_finite() || value <= 0.0 => {
            Err(Error::Config(format!("{key} must be positive, got {value}")))
        }
        value => Ok(value),
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).expect("defaults are valid");

        assert_eq!(config, Config::default());
        assert_eq!(config.backend_url, "http://localhost:8080");
        assert_eq!(config.locale, Locale::Korean);
        assert_eq!(config.announce_delay, Duration::from_millis(1200));
        assert_eq!(config.voice.language, "ko-KR");
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            (BACKEND_URL, "https://api.example.org"),
            (LOCALE, "en"),
            (ANNOUNCE_DELAY_MS, "500"),
            (VOICE_RATE, "1.25"),
            (REQUEST_TIMEOUT_MS, "3000"),
            (SCAN_BUFFER, " 0.02 "),
            (VOICE_PITCH, ""),
        ])
        .expect("valid overrides");

        assert_eq!(config.backend_url, "https://api.example.org");
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.navigator().announce_delay, Duration::from_millis(500));
        assert_eq!(config.voice.rate, 1.25);
        assert_eq!(config.voice.pitch, 1.0);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.scan_buffer, 0.02);
    }

    #[test]
    fn malformed_values_are_config_errors() {
        for pair in [
            (ANNOUNCE_DELAY_MS, "soon"),
            (VOICE_RATE, "fast"),
            (VOICE_PITCH, "-1"),
            (SCAN_BUFFER, "0"),
            (LOCALE, "klingon"),
        ] {
            assert!(
                matches!(config(&[pair]), Err(Error::Config(_))),
                "{pair:?} should be rejected"
            );
        }
    }
}
