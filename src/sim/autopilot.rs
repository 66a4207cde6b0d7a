//! Simple jump policy used by the headless runner
//!
//! Jumps when an uncollected rainbow is about to pass over the unicorn, timed
//! so the peak of the jump roughly meets it.

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::{GRAVITY, JUMP_POWER, SCROLL_SPEED};

/// Decide this tick's input from the current state
pub fn choose_input(state: &GameState) -> TickInput {
    let player = &state.player;
    if !player.is_grounded() {
        return TickInput::default();
    }

    // Distance the world scrolls while the jump rises
    let lead = (-JUMP_POWER / GRAVITY) * SCROLL_SPEED;
    let window_start = player.pos.x + lead * 0.5;
    let window_end = player.pos.x + player.size.x + lead;

    let jump = state
        .collectibles
        .iter()
        .filter(|c| !c.collected && c.pos.y < player.pos.y)
        .any(|c| c.pos.x >= window_start && c.pos.x <= window_end);

    TickInput { jump }
}
