//! Replays a walking trace along a stored route and logs every announcement.
//!
//! ```bash
//! RUST_LOG=clearway=debug clearway route.json trace.json
//! ```
//!
//! The trace is a JSON array of `[latitude, longitude]` pairs, fed to the
//! proximity trigger one per tick (`CLEARWAY_SIMULATOR_TICK_MS`).

use std::sync::Arc;

use log::{debug, info};

use clearway::{
    announce, build_guidance_steps, build_summary_text, Config, Error, LogVoice, NavigationState, Navigator,
    ProximityTrigger, RouteData,
};
use clearway_geo::lat_lng;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Installs the logger, then reads the configuration, so that `.env`
/// loading is itself logged. `RUST_LOG` may come from `.env`.
fn startup() -> Result<Config, Error> {
    dotenv::dotenv().ok();

    #[cfg(feature = "tracing")]
    clearway::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    clearway::util::trace::initialize_logger();

    Config::from_env()
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = startup()?;

    let mut args = std::env::args_os().skip(1);
    let (Some(route_path), Some(trace_path)) = (args.next(), args.next()) else {
        eprintln!("usage: clearway <route.json> <trace.json>");
        std::process::exit(2);
    };

    let route = RouteData::from_json(&tokio::fs::read_to_string(&route_path).await?)?;
    let trace: Vec<[f64; 2]> = serde_json::from_str(&tokio::fs::read_to_string(&trace_path).await?)?;

    let voice = Arc::new(LogVoice::new(config.voice.clone()));
    let mut navigator = Navigator::new(voice.clone(), config.navigator());
    let mut trigger = ProximityTrigger::new();

    let steps = build_guidance_steps(&route, config.locale);
    let summary = build_summary_text(&route, None, config.locale);
    info!("Replaying {} locations over {} steps", trace.len(), steps.len());

    navigator.load_route(route, steps);
    announce(voice.as_ref(), &summary);

    let mut ticker = tokio::time::interval(config.simulator_tick);
    for (tick, [lat, lng]) in trace.into_iter().enumerate() {
        ticker.tick().await;

        let proximity = trigger.observe(lat_lng(lat, lng), &mut navigator);
        debug!("#{tick} ({lat:.5}, {lng:.5}) -> {proximity:?}");

        if navigator.state() == NavigationState::Completed {
            break;
        }
    }

    if navigator.has_pending_announcement() {
        tokio::time::sleep(config.announce_delay).await;
    }

    info!(
        "Finished in state {:?} at step {}/{}",
        navigator.state(),
        navigator.current_index(),
        navigator.steps().len()
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use super::startup;

    #[test]
    fn logger_is_ready_before_configuration() {
        let config = startup().expect("default configuration");

        assert!(log::max_level() >= log::LevelFilter::Error);
        assert_eq!(config.simulator_tick, clearway::config::DEFAULT_SIMULATOR_TICK);
    }
}
