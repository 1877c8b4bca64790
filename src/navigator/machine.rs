use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::guidance::{GuidanceStep, Locale};
use crate::route::RouteData;
use crate::voice::{announce, VoiceOutput};

/// Pause between an action ("turn left now") and the next step's approach,
/// so the two are not spoken over each other.
pub const DEFAULT_ANNOUNCE_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    pub announce_delay: Duration,
    pub locale: Locale,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        NavigatorConfig {
            announce_delay: DEFAULT_ANNOUNCE_DELAY,
            locale: Locale::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    /// No steps loaded.
    Empty,
    /// A step is awaiting its trigger.
    Active,
    /// Every step has been reached.
    Completed,
}

/// Owns the loaded route and walks through its guidance steps.
///
/// The navigator is the only mutator of its route, steps and step index.
/// At most one announcement is ever scheduled; it is aborted by every
/// state change that would make it stale.
///
/// Scheduling needs a Tokio runtime. Outside of one, the delayed
/// approach announcement is skipped.
pub struct Navigator {
    voice: Arc<dyn VoiceOutput>,
    config: NavigatorConfig,

    route: Option<RouteData>,
    steps: Vec<GuidanceStep>,
    current: usize,
    generation: u64,

    pending: Option<JoinHandle<()>>,
}

impl Navigator {
    pub fn new(voice: Arc<dyn VoiceOutput>, config: NavigatorConfig) -> Self {
        Navigator {
            voice,
            config,
            route: None,
            steps: Vec::new(),
            current: 0,
            generation: 0,
            pending: None,
        }
    }

    /// Replaces whatever was loaded and announces the first step.
    pub fn load_route(&mut self, route: RouteData, steps: Vec<GuidanceStep>) {
        self.cancel_pending();

        self.route = Some(route);
        self.steps = steps;
        self.current = 0;
        self.generation += 1;

        info!("Loaded route with {} guidance steps", self.steps.len());

        if let Some(text) = self.steps.first().and_then(GuidanceStep::activation_text) {
            announce(self.voice.as_ref(), text);
        }
    }

    /// Drops the route and silences any guidance in flight.
    pub fn clear_route(&mut self) {
        self.cancel_pending();

        self.route = None;
        self.steps.clear();
        self.current = 0;
        self.generation += 1;

        debug!("Cleared route");
        self.voice.stop();
    }

    /// Called once the active step's target has been reached.
    ///
    /// Speaks the step's action, then either moves on to the next step,
    /// whose approach is spoken after the configured delay, or announces
    /// arrival and completes the route.
    pub fn announce_action_for_current_step(&mut self) {
        let Some(step) = self.steps.get(self.current) else {
            debug!("No active step to announce");
            return;
        };

        if let Some(text) = step.arrival_text() {
            announce(self.voice.as_ref(), text);
        }

        self.cancel_pending();
        let next = self.current + 1;

        match self.steps.get(next) {
            Some(step) => {
                debug!("Advancing to step {next} ({})", step.id);
                let approach = step.approach_text.clone();
                self.current = next;
                self.schedule(approach);
            }
            None => {
                info!("Arrived at destination");
                self.current = self.steps.len();
                announce(self.voice.as_ref(), self.config.locale.arrival());
            }
        }
    }

    pub fn state(&self) -> NavigationState {
        if self.steps.is_empty() {
            NavigationState::Empty
        } else if self.current < self.steps.len() {
            NavigationState::Active
        } else {
            NavigationState::Completed
        }
    }

    pub fn route(&self) -> Option<&RouteData> {
        self.route.as_ref()
    }

    pub fn steps(&self) -> &[GuidanceStep] {
        &self.steps
    }

    /// Index of the active step; equal to the step count once completed.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Option<&GuidanceStep> {
        self.steps.get(self.current)
    }

    /// Incremented by every load and clear.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    pub fn has_pending_announcement(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn schedule(&mut self, text: String) {
        if text.trim().is_empty() {
            return;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("No async runtime available, skipping delayed announcement");
            return;
        };

        // Fix the deadline now rather than when the task is first polled.
        let deadline = Instant::now() + self.config.announce_delay;
        let voice = Arc::clone(&self.voice);

        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            announce(voice.as_ref(), &text);
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Navigator {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
