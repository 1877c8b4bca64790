use std::fmt::{Display, Formatter};

use geo::Point;

use crate::guidance::Locale;

/// Radius used when an instruction carries no usable distance, in meters.
pub const DEFAULT_TRIGGER_DISTANCE: f64 = 20.0;
/// Trigger radii are kept within this range, in meters.
pub const MIN_TRIGGER_DISTANCE: f64 = 12.0;
pub const MAX_TRIGGER_DISTANCE: f64 = 50.0;

/// Identifier of a step, unique within one built sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StepId(String);

impl StepId {
    pub fn new(index: usize, text: Option<&str>) -> Self {
        StepId(format!("{index}-{}", text.unwrap_or("step")))
    }

    pub fn fallback() -> Self {
        StepId("fallback".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StepId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One normalised unit of turn-by-turn guidance.
#[derive(Debug, Clone, PartialEq)]
pub struct GuidanceStep {
    pub id: StepId,
    /// Spoken when the step becomes active.
    pub approach_text: String,
    /// Spoken when the user comes within `trigger_distance` of `target`.
    pub action_text: String,
    /// Without a target the step can never be reached by proximity.
    pub target: Option<Point>,
    pub trigger_distance: f64,
}

impl GuidanceStep {
    /// The single step emitted when a route has a path but no instructions.
    pub fn fallback(destination: Point, locale: Locale) -> Self {
        GuidanceStep {
            id: StepId::fallback(),
            approach_text: locale.fallback_approach().to_string(),
            action_text: locale.fallback_action().to_string(),
            target: Some(destination),
            trigger_distance: DEFAULT_TRIGGER_DISTANCE,
        }
    }

    /// Text to speak on activation: the approach, else the action.
    pub fn activation_text(&self) -> Option<&str> {
        non_empty(&self.approach_text).or_else(|| non_empty(&self.action_text))
    }

    /// Text to speak on arrival at the target: the action, else the approach.
    pub fn arrival_text(&self) -> Option<&str> {
        non_empty(&self.action_text).or_else(|| non_empty(&self.approach_text))
    }
}

fn non_empty(text: &str) -> Option<&str> {
    Some(text).filter(|text| !text.trim().is_empty())
}
