use std::fmt::{Display, Formatter};

use clearway_geo::GeoError;

use crate::impl_err;

#[derive(Debug)]
pub enum Error {
    Geo(GeoError),
    Io(std::io::Error),
    Json(serde_json::Error),
    #[cfg(feature = "client")]
    Http(reqwest::Error),

    /// A configuration value could not be interpreted.
    Config(String),
    /// The backend answered with a non-success status, or without a result.
    Backend { status: u16, message: String },

    MissingLocation,
    MissingDevice,
    MissingDestination,
    MissingDescription,
}

impl_err!(GeoError, Geo);
impl_err!(std::io::Error, Io);
impl_err!(serde_json::Error, Json);
#[cfg(feature = "client")]
impl_err!(reqwest::Error, Http);

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Geo(err) => write!(f, "{err}"),
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Json(err) => write!(f, "malformed json: {err}"),
            #[cfg(feature = "client")]
            Error::Http(err) => write!(f, "request failed: {err}"),
            Error::Config(reason) => write!(f, "invalid configuration: {reason}"),
            Error::Backend { status, message } => write!(f, "backend error ({status}): {message}"),
            Error::MissingLocation => write!(f, "current location is not known yet"),
            Error::MissingDevice => write!(f, "device id is not registered yet"),
            Error::MissingDestination => write!(f, "no destination given"),
            Error::MissingDescription => write!(f, "report description is empty"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Geo(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            #[cfg(feature = "client")]
            Error::Http(err) => Some(err),
            _ => None,
        }
    }
}
