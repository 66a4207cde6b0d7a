//! Per-frame simulation tick
//!
//! Stage order is fixed: integrate, scroll, collide, spawn. Collision runs
//! after integration and may override it (snapping onto a cloud), and the
//! support height it computes is what the next tick integrates against.

use super::collision::{CollisionReport, resolve_collisions};
use super::physics::integrate;
use super::spawn::{SpawnReport, advance_entities, replenish};
use super::state::GameState;
use crate::consts::SCROLL_SPEED;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requested since the last tick (click/mousedown/touchstart)
    pub jump: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub jumped: bool,
    pub collision: CollisionReport,
    pub spawned: SpawnReport,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    if input.jump {
        report.jumped = state.player.jump();
    }

    state.time_ticks += 1;
    state.scroll_offset += SCROLL_SPEED;

    integrate(&mut state.player);
    advance_entities(state);
    report.collision = resolve_collisions(state);
    report.spawned = replenish(state);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::spawn::populate;
    use crate::sim::state::{Collectible, Platform, PlatformTier};
    use proptest::prelude::*;

    #[test]
    fn test_jump_then_fall_back_to_ground() {
        let mut state = GameState::new(5);
        let jump = TickInput { jump: true };

        let report = tick(&mut state, &jump);
        assert!(report.jumped);
        assert!(!state.player.is_grounded());
        assert!(state.player.pos.y < GROUND_Y);

        // A second press mid-air does nothing
        let vel = state.player.vel_y;
        let report = tick(&mut state, &jump);
        assert!(!report.jumped);
        assert!((state.player.vel_y - (vel + GRAVITY)).abs() < 1e-4);

        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
            if state.player.is_grounded() {
                break;
            }
        }
        assert!(state.player.is_grounded());
        assert_eq!(state.player.pos.y, GROUND_Y);
    }

    #[test]
    fn test_jump_onto_low_cloud() {
        let mut state = GameState::new(5);
        // Wide enough to still be under the player when the fall begins
        let mut cloud = Platform::new(PLAYER_X, 400.0, PlatformTier::Low);
        cloud.size.x = 2000.0;
        state.platforms.push(cloud);

        tick(&mut state, &TickInput { jump: true });
        let mut on_cloud = false;
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
            if state.player.is_grounded() {
                on_cloud = state.player.pos.y == 400.0 - PLAYER_HEIGHT;
                break;
            }
        }
        assert!(on_cloud);
        assert_eq!(state.player.support_y, 400.0 - PLAYER_HEIGHT);

        // Resting there is stable
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.player.pos.y, 400.0 - PLAYER_HEIGHT);
        assert!(state.player.is_grounded());
    }

    #[test]
    fn test_scroll_offset_advances() {
        let mut state = GameState::new(5);
        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 2);
        assert_eq!(state.scroll_offset, 2.0 * SCROLL_SPEED);
    }

    #[test]
    fn test_pickup_during_tick() {
        let mut state = GameState::new(5);
        // Lands on the player after this tick's scroll
        let p = state.player.pos;
        state
            .collectibles
            .push(Collectible::new(p.x + SCROLL_SPEED, p.y, 0.0));

        let report = tick(&mut state, &TickInput::default());
        assert_eq!(report.collision.collected, 1);
        assert_eq!(state.score, COLLECTIBLE_REWARD);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        populate(&mut state1);
        populate(&mut state2);

        for i in 0..600 {
            let input = TickInput { jump: i % 37 == 0 };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.platforms.len(), state2.platforms.len());
        assert_eq!(state1.player.pos, state2.player.pos);
        for (a, b) in state1.collectibles.iter().zip(&state2.collectibles) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.collected, b.collected);
        }
    }

    proptest! {
        #[test]
        fn score_counts_each_collected_item_once(seed in any::<u64>(), jump_every in 5u64..60) {
            let mut state = GameState::new(seed);
            populate(&mut state);
            for i in 0..1200u64 {
                let before = state.score;
                let report = tick(&mut state, &TickInput { jump: i % jump_every == 0 });
                prop_assert_eq!(
                    state.score - before,
                    report.collision.collected as u64 * COLLECTIBLE_REWARD
                );
            }
        }

        #[test]
        fn grounded_player_never_below_support(seed in any::<u64>(), jump_every in 3u64..50) {
            let mut state = GameState::new(seed);
            populate(&mut state);
            for i in 0..900u64 {
                tick(&mut state, &TickInput { jump: i % jump_every == 0 });
                let player = &state.player;
                prop_assert!(player.pos.y <= GROUND_Y);
                if player.is_grounded() && player.pos.y == player.support_y {
                    prop_assert_eq!(player.vel_y, 0.0);
                }
            }
        }
    }
}
