use geo::Point;
use log::debug;

use clearway_geo::{haversine, LatLng};

use crate::guidance::{GuidanceStep, StepId};
use crate::navigator::Navigator;

/// What the proximity trigger may see and do.
///
/// It reads the active step and calls exactly one mutation; it never
/// changes guidance state itself.
pub trait Guided {
    /// Changes whenever a new step sequence is loaded or cleared.
    fn generation(&self) -> u64;
    fn active_step(&self) -> Option<&GuidanceStep>;
    fn reach_active_step(&mut self);
}

impl Guided for Navigator {
    fn generation(&self) -> u64 {
        Navigator::generation(self)
    }

    fn active_step(&self) -> Option<&GuidanceStep> {
        self.current_step()
    }

    fn reach_active_step(&mut self) {
        self.announce_action_for_current_step()
    }
}

/// Outcome of a single location update.
#[derive(Debug, Clone, PartialEq)]
pub enum Proximity {
    /// Nothing to track: no active step, or it has no target.
    Idle,
    /// Outside the trigger radius.
    Approaching { distance: f64 },
    /// Crossed into the radius; the step was reached.
    Fired { step: StepId, distance: f64 },
    /// Still inside the radius of a step that already fired.
    Inside { distance: f64 },
    /// Left the radius of a step that fired, it may fire again.
    Rearmed { step: StepId, distance: f64 },
}

/// Edge-triggered step detection.
///
/// A step fires once when the user enters its radius. Leaving the radius
/// re-arms it, so re-entering fires again.
#[derive(Debug, Default)]
pub struct ProximityTrigger {
    /// The step whose action was already announced.
    awaiting: Option<StepId>,
    generation: Option<u64>,
}

impl ProximityTrigger {
    pub fn new() -> Self {
        ProximityTrigger::default()
    }

    /// A non-finite location is ignored and leaves the fired marker alone.
    pub fn observe<G: Guided + ?Sized>(&mut self, location: Point, guided: &mut G) -> Proximity {
        if !location.is_finite() {
            debug!("Ignoring non-finite location {location:?}");
            return Proximity::Idle;
        }

        let generation = guided.generation();
        if self.generation != Some(generation) {
            self.awaiting = None;
            self.generation = Some(generation);
        }

        let Some((step, target, threshold)) = guided.active_step().and_then(|step| {
            step.target
                .map(|target| (step.id.clone(), target, step.trigger_distance))
        }) else {
            return Proximity::Idle;
        };

        let distance = haversine(&location, &target);
        if !distance.is_finite() {
            return Proximity::Idle;
        }

        let fired = self.awaiting.as_ref() == Some(&step);

        match (distance <= threshold, fired) {
            (true, true) => Proximity::Inside { distance },
            (true, false) => {
                debug!("Reached step {step} at {distance:.1}m (radius {threshold}m)");
                self.awaiting = Some(step.clone());
                guided.reach_active_step();
                Proximity::Fired { step, distance }
            }
            (false, true) => {
                debug!("Left radius of step {step}, re-arming");
                self.awaiting = None;
                Proximity::Rearmed { step, distance }
            }
            (false, false) => Proximity::Approaching { distance },
        }
    }

    /// Forgets the fired step.
    pub fn reset(&mut self) {
        self.awaiting = None;
        self.generation = None;
    }
}
