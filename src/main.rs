//! Rock Splitter entry point
//!
//! Runs a headless session: a scripted pilot sweeps the field and fires while
//! the fixed-step loop advances the simulation. Window and GPU integration
//! live outside this crate; the draw list is built each frame to exercise the
//! presentation path.
//!
//! Usage: `rock-splitter [settings.json] [seed]`

use rock_splitter::consts::SIM_DT;
use rock_splitter::renderer::build_frame;
use rock_splitter::sim::{FrameClock, SimEvent, SimState, Snapshot, TickInput, step};
use rock_splitter::{ConfigError, Settings};

/// Simulated session length
const SESSION_SECONDS: f32 = 20.0;
/// Fire one shot every this many ticks
const FIRE_INTERVAL: u64 = 6;

fn main() -> Result<(), ConfigError> {
    env_logger::init();
    log::info!("Rock Splitter (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut state = SimState::with_settings(seed, &settings)?;
    let mut clock = FrameClock::new();
    let mut latest = Snapshot::capture(&state);

    let frames = (SESSION_SECONDS / SIM_DT) as u32;
    for _ in 0..frames {
        for _ in 0..clock.advance(SIM_DT) {
            let input = pilot(&state);
            step(&mut state, &input, SIM_DT);
            for event in &state.events {
                if let SimEvent::AsteroidDestroyed { id, children } = event {
                    log::debug!("Asteroid {} destroyed ({} fragments)", id, children);
                }
            }
        }

        let snapshot = Snapshot::capture(&state);
        if snapshot.is_newer_than(&latest) {
            let vertices = build_frame(&state);
            log::trace!(
                "Frame {}: {} vertices, {:.2} tick carried over",
                snapshot.generation,
                vertices.len(),
                clock.alpha()
            );
            latest = snapshot;
        }
    }

    log::info!(
        "Session over after {} ticks ({:.1}s): fired {}, destroyed {}, {} asteroids left",
        state.time_ticks,
        state.elapsed,
        state.projectiles_fired,
        state.asteroids_destroyed,
        state.asteroids.len()
    );

    Ok(())
}

/// Scripted input: keep turning, fire on a fixed cadence, nudge forward now and then
fn pilot(state: &SimState) -> TickInput {
    let t = state.time_ticks;
    TickInput {
        rotate_right: true,
        thrust: t % 240 < 30,
        fire: t % FIRE_INTERVAL == 0,
        ..Default::default()
    }
}
