//! Voice-guided walking directions that steer around smoking areas.
//!
//! A route found by the backend is normalised into [`GuidanceStep`]s, loaded
//! into a [`Navigator`], and driven forward by a [`ProximityTrigger`] fed with
//! live locations. Each transition is spoken through a [`VoiceOutput`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use clearway::{build_guidance_steps, Locale, LogVoice, Navigator, NavigatorConfig, ProximityTrigger, RouteData};
//!
//! # async fn run(route: RouteData, trace: Vec<geo::Point>) {
//! let voice = Arc::new(LogVoice::default());
//! let mut navigator = Navigator::new(voice, NavigatorConfig::default());
//! let mut trigger = ProximityTrigger::default();
//!
//! let steps = build_guidance_steps(&route, Locale::Korean);
//! navigator.load_route(route, steps);
//!
//! for location in trace {
//!     trigger.observe(location, &mut navigator);
//! }
//! # }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod guidance;
pub mod navigator;
pub mod nlu;
pub mod route;
pub mod session;
pub mod util;
pub mod voice;

#[doc(inline)]
pub use backend::Backend;
#[cfg(feature = "client")]
#[doc(inline)]
pub use backend::HttpBackend;
#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use guidance::{build_guidance_steps, build_summary_text, GuidanceStep, Locale, StepId};
#[doc(inline)]
pub use navigator::{NavigationState, Navigator, NavigatorConfig, Proximity, ProximityTrigger};
#[doc(inline)]
pub use route::{RawInstruction, RouteData};
#[doc(inline)]
pub use session::{CommandOutcome, Session};
#[doc(inline)]
pub use voice::{announce, LogVoice, VoiceOutput, VoiceSettings};
