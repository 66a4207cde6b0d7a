//! Windowless run of the simulation
//!
//! Drives the same tick as the browser build with the autopilot standing in
//! for the player. Used by the native binary to smoke-test a seed.

use serde::Serialize;

use crate::sim::autopilot::choose_input;
use crate::sim::{GameState, populate, tick};

/// Stats from a headless run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub score: u64,
    pub collected: u64,
    pub jumps: u64,
    /// Landings on clouds (ground landings not counted)
    pub cloud_landings: u64,
    /// Distance scrolled, in world pixels
    pub distance: f32,
}

/// Run `frames` ticks from a fresh world
pub fn run(seed: u64, frames: u64) -> RunSummary {
    let mut state = GameState::new(seed);
    populate(&mut state);

    let mut summary = RunSummary {
        seed,
        frames,
        ..Default::default()
    };

    for _ in 0..frames {
        let input = choose_input(&state);
        let report = tick(&mut state, &input);
        summary.jumps += u64::from(report.jumped);
        summary.collected += u64::from(report.collision.collected);
        summary.cloud_landings += u64::from(report.collision.landed);
    }

    summary.score = state.score;
    summary.distance = state.scroll_offset;
    log::info!(
        "Headless run finished: score {} after {} frames ({} jumps)",
        summary.score,
        frames,
        summary.jumps
    );
    summary
}
