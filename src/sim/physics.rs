//! Vertical integration for the player
//!
//! Gravity is applied before position, so a jump of `JUMP_POWER` peaks after
//! `|JUMP_POWER| / GRAVITY` ticks. The support height used here is the one the
//! collision pass computed on the previous tick.

use super::state::{Player, Stance};
use crate::consts::GRAVITY;

/// Advance the player by one tick. Returns true if the player came to rest on
/// its support during this step.
pub fn integrate(player: &mut Player) -> bool {
    player.vel_y += GRAVITY;
    player.pos.y += player.vel_y;

    let landed = if player.pos.y >= player.support_y {
        let was_airborne = player.stance == Stance::Airborne;
        player.land(player.support_y);
        was_airborne
    } else {
        false
    };

    // Faster gallop while falling
    player.anim_phase += if player.vel_y > 0.0 { 0.4 } else { 0.2 };

    landed
}
