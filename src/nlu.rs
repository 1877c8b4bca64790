//! Intents recognised by the backend's natural-language endpoint.

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::route::lenient;

/// The raw NLU answer: `{ "intent": "SEARCH_ROUTE", "destination": "강남역" }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NluResult {
    #[serde(default, deserialize_with = "lenient::text")]
    pub intent: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    SearchRoute,
    ReportSmoking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SearchRoute { destination: Option<String> },
    ReportSmoking,
    Unknown(Option<String>),
}

impl From<NluResult> for Intent {
    fn from(result: NluResult) -> Self {
        let kind = result
            .intent
            .as_deref()
            .and_then(|intent| intent.trim().parse::<IntentKind>().ok());

        match kind {
            Some(IntentKind::SearchRoute) => Intent::SearchRoute {
                destination: result
                    .destination
                    .map(|destination| destination.trim().to_string())
                    .filter(|destination| !destination.is_empty()),
            },
            Some(IntentKind::ReportSmoking) => Intent::ReportSmoking,
            None => Intent::Unknown(result.intent),
        }
    }
}
