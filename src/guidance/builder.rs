//! Normalises a route service response into guidance steps.

use geo::Point;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::guidance::step::{DEFAULT_TRIGGER_DISTANCE, MAX_TRIGGER_DISTANCE, MIN_TRIGGER_DISTANCE};
use crate::guidance::{GuidanceStep, Locale, StepId, Turn};
use crate::route::{RawInstruction, RouteData};

/// A first instruction closer than this is announced as "from current position".
const IMMEDIATE_DISTANCE: f64 = 12.0;
/// Share of the leg length used as trigger radius, before clamping.
const TRIGGER_RATIO: f64 = 0.2;
/// Spoken distances are rounded up to a multiple of this, in meters.
const DISTANCE_GRANULARITY: f64 = 5.0;

static DISTANCE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?|\.\d+").expect("static distance pattern"));

/// Builds the ordered guidance steps of a route.
///
/// Never fails: missing or malformed instruction fields degrade into
/// placeholder text, and a route with a path but no instructions yields a
/// single step towards the destination.
pub fn build_guidance_steps(route: &RouteData, locale: Locale) -> Vec<GuidanceStep> {
    let path = route.path_coordinates.as_slice();

    if route.voice_instructions.is_empty() {
        debug!("Route has no instructions, falling back to the guide line");
        return route
            .destination()
            .map(|destination| vec![GuidanceStep::fallback(destination, locale)])
            .unwrap_or_default();
    }

    route
        .voice_instructions
        .iter()
        .enumerate()
        .map(|(index, instruction)| build_step(index, instruction, path, locale))
        .collect()
}

fn build_step(
    index: usize,
    instruction: &RawInstruction,
    path: &[Point],
    locale: Locale,
) -> GuidanceStep {
    let meters = distance_meters(instruction);
    let approach_text = approach_text(index, instruction, locale);
    let action_text = action_text(instruction, &approach_text, locale);

    let target = instruction
        .coordinate()
        .or_else(|| path.get(index + 1).copied())
        .or_else(|| path.last().copied());

    GuidanceStep {
        id: StepId::new(index, instruction.text.as_deref()),
        approach_text,
        action_text,
        target,
        trigger_distance: trigger_distance(meters),
    }
}

/// Numeric value of a distance label, honouring a `km` unit.
/// `None` when the label holds no number.
pub fn parse_distance_text(text: &str) -> Option<f64> {
    let number = DISTANCE_NUMBER.find(text)?.as_str().replace(',', "");
    let value = number.parse::<f64>().ok().filter(|value| value.is_finite())?;

    if text.to_ascii_lowercase().contains("km") {
        Some(value * 1000.0)
    } else {
        Some(value)
    }
}

/// Leg length in meters: the numeric field, else the parsed label.
pub fn distance_meters(instruction: &RawInstruction) -> Option<f64> {
    instruction
        .distance_meters
        .or_else(|| instruction.distance_text.as_deref().and_then(parse_distance_text))
}

/// The distance as it should be spoken.
///
/// A label is only trusted when it contains a number; otherwise the meter
/// count is rounded up to a multiple of five.
pub fn distance_label(instruction: &RawInstruction) -> Option<String> {
    if let Some(label) = instruction
        .distance_text
        .as_deref()
        .filter(|label| parse_distance_text(label).is_some())
    {
        return Some(label.to_string());
    }

    instruction.distance_meters.map(|meters| {
        let rounded = (meters / DISTANCE_GRANULARITY).ceil() * DISTANCE_GRANULARITY;
        format!("{}m", rounded.max(DISTANCE_GRANULARITY) as u64)
    })
}

/// The maneuver label: explicit fields first, then a left/right guess
/// from the free text.
pub fn maneuver_label(instruction: &RawInstruction, locale: Locale) -> Option<String> {
    instruction
        .maneuver
        .clone()
        .or_else(|| instruction.action.clone())
        .or_else(|| {
            instruction
                .text
                .as_deref()
                .and_then(Turn::detect_side)
                .map(|turn| locale.turn_label(turn).to_string())
        })
}

pub fn approach_text(index: usize, instruction: &RawInstruction, locale: Locale) -> String {
    let meters = distance_meters(instruction);
    let distance = distance_label(instruction);
    let maneuver = maneuver_label(instruction, locale);
    let street = instruction.street();
    let text = instruction.text.as_deref();

    let immediate = index == 0 && meters.map_or(true, |meters| meters < IMMEDIATE_DISTANCE);

    match (distance.as_deref(), maneuver.as_deref(), text) {
        (_, Some(maneuver), _) if immediate => locale.immediate(maneuver, street),
        (Some(distance), Some(maneuver), _) => locale.ahead(distance, maneuver, street),
        (Some(distance), None, Some(text)) => format!("{distance} {text}"),
        (_, _, Some(text)) => text.to_string(),
        _ => locale.placeholder(index),
    }
}

pub fn action_text(instruction: &RawInstruction, approach_text: &str, locale: Locale) -> String {
    let source = instruction.text.as_deref().unwrap_or(approach_text);
    locale.action(Turn::detect(source)).to_string()
}

/// A fifth of the leg length, clamped into the trigger range.
pub fn trigger_distance(meters: Option<f64>) -> f64 {
    match meters.filter(|meters| *meters > 0.0) {
        Some(meters) => (meters * TRIGGER_RATIO)
            .round()
            .clamp(MIN_TRIGGER_DISTANCE, MAX_TRIGGER_DISTANCE),
        None => DEFAULT_TRIGGER_DISTANCE,
    }
}
