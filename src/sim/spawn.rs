//! Spawning, scrolling and recycling of world entities
//!
//! Clouds and rainbows live in bounded lists that are topped up from the
//! right edge and compacted as entries leave on the left. Background clouds
//! are never removed; they wrap around instead.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Collectible, Decoration, GameState, Platform, PlatformTier};
use crate::consts::*;

/// Counts of entities appended by one `replenish` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub platforms: usize,
    pub collectibles: usize,
}

/// Build the opening layout: staggered clouds, a row of rainbows and the
/// parallax layer
pub fn populate(state: &mut GameState) {
    state.platforms.clear();
    state.collectibles.clear();
    state.decorations.clear();

    let rng = &mut state.rng;

    for i in 0..PLATFORM_TARGET {
        let tier = PlatformTier::cycled(i);
        let y = tier.sample_height(rng);
        state
            .platforms
            .push(Platform::new(300.0 + i as f32 * 160.0, y, tier));
    }

    for i in 0..8 {
        let y = rng.random_range(COLLECTIBLE_MIN_Y..COLLECTIBLE_MAX_Y);
        let phase = rng.random_range(0.0..TAU);
        state
            .collectibles
            .push(Collectible::new(350.0 + i as f32 * 200.0, y, phase));
    }

    for _ in 0..DECORATION_COUNT {
        let x = rng.random_range(0.0..VIEW_WIDTH * 2.0);
        let y = decoration_height(rng);
        state.decorations.push(Decoration {
            pos: Vec2::new(x, y),
            size: Vec2::new(rng.random_range(100.0..150.0), rng.random_range(50.0..80.0)),
            speed: rng.random_range(0.5..2.0),
            opacity: rng.random_range(0.3..0.7),
        });
    }

    log::debug!(
        "Populated {} platforms, {} collectibles, {} decorations",
        state.platforms.len(),
        state.collectibles.len(),
        state.decorations.len()
    );
}

fn decoration_height(rng: &mut impl Rng) -> f32 {
    rng.random_range(50.0..150.0)
}

/// Movement step: scroll everything left, drop clouds and rainbows that have
/// fully left the screen, and wrap background clouds back to the right
pub fn advance_entities(state: &mut GameState) {
    for platform in &mut state.platforms {
        platform.pos.x -= SCROLL_SPEED;
    }
    state.platforms.retain(|p| p.right_edge() >= 0.0);

    for collectible in &mut state.collectibles {
        collectible.pos.x -= SCROLL_SPEED;
        collectible.bob_phase += 0.1;
    }
    // Collected or not, a rainbow lives until it scrolls off
    state.collectibles.retain(|c| c.right_edge() >= 0.0);

    let rng = &mut state.rng;
    for decoration in &mut state.decorations {
        decoration.pos.x -= decoration.speed;
        if decoration.right_edge() < 0.0 {
            decoration.pos.x = VIEW_WIDTH + rng.random_range(0.0..200.0);
            decoration.pos.y = decoration_height(rng);
        }
    }
}

/// Generation step: append at most one cloud and one rainbow, and only once
/// the newest one has moved far enough in from the right edge
pub fn replenish(state: &mut GameState) -> SpawnReport {
    let mut report = SpawnReport::default();
    let rng = &mut state.rng;

    let room_for_platform = state
        .platforms
        .last()
        .is_none_or(|p| p.pos.x < VIEW_WIDTH - PLATFORM_SPACING);
    if state.platforms.len() < PLATFORM_TARGET && room_for_platform {
        let tier = PlatformTier::random(rng);
        let x = VIEW_WIDTH + rng.random_range(0.0..PLATFORM_SPAWN_JITTER);
        let y = tier.sample_height(rng);
        state.platforms.push(Platform::new(x, y, tier));
        report.platforms = 1;
        log::trace!("Spawned {:?} platform at ({:.0}, {:.0})", tier, x, y);
    }

    let room_for_collectible = state
        .collectibles
        .last()
        .is_none_or(|c| c.pos.x < VIEW_WIDTH - COLLECTIBLE_SPACING);
    if state.collectibles.len() < COLLECTIBLE_TARGET && room_for_collectible {
        let x = VIEW_WIDTH + rng.random_range(0.0..COLLECTIBLE_SPAWN_JITTER);
        let y = rng.random_range(COLLECTIBLE_MIN_Y..COLLECTIBLE_MAX_Y);
        let phase = rng.random_range(0.0..TAU);
        state.collectibles.push(Collectible::new(x, y, phase));
        report.collectibles = 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_populate_layout() {
        let mut state = GameState::new(42);
        populate(&mut state);

        assert_eq!(state.platforms.len(), PLATFORM_TARGET);
        assert_eq!(state.collectibles.len(), 8);
        assert_eq!(state.decorations.len(), DECORATION_COUNT);

        for (i, platform) in state.platforms.iter().enumerate() {
            assert_eq!(platform.pos.x, 300.0 + i as f32 * 160.0);
            assert_eq!(platform.tier, PlatformTier::cycled(i));
            assert!(platform.tier.height_range().contains(&platform.top()));
        }
        for c in &state.collectibles {
            assert!((COLLECTIBLE_MIN_Y..COLLECTIBLE_MAX_Y).contains(&c.pos.y));
            assert!(!c.collected);
        }
        for d in &state.decorations {
            assert!((0.3..0.7).contains(&d.opacity));
            assert!((0.5..2.0).contains(&d.speed));
        }
    }

    #[test]
    fn test_offscreen_entities_removed() {
        let mut state = GameState::new(1);
        // Right edges at 2 and -1 after one step
        state
            .platforms
            .push(Platform::new(-PLATFORM_WIDTH + 6.0, 300.0, PlatformTier::High));
        state
            .platforms
            .push(Platform::new(-PLATFORM_WIDTH + 3.0, 300.0, PlatformTier::High));
        let mut taken = Collectible::new(-COLLECTIBLE_SIZE + 3.0, 250.0, 0.0);
        taken.collected = true;
        state.collectibles.push(taken);

        advance_entities(&mut state);

        assert_eq!(state.platforms.len(), 1);
        assert_eq!(state.platforms[0].right_edge(), 2.0);
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn test_collected_items_keep_scrolling() {
        let mut state = GameState::new(1);
        let mut c = Collectible::new(500.0, 250.0, 0.0);
        c.collected = true;
        state.collectibles.push(c);

        advance_entities(&mut state);
        assert_eq!(state.collectibles.len(), 1);
        assert_eq!(state.collectibles[0].pos.x, 500.0 - SCROLL_SPEED);
        assert!((state.collectibles[0].bob_phase - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_decoration_wraps_to_right_edge() {
        let mut state = GameState::new(3);
        state.decorations.push(Decoration {
            pos: Vec2::new(-119.5, 80.0),
            size: Vec2::new(120.0, 60.0),
            speed: 1.0,
            opacity: 0.5,
        });

        advance_entities(&mut state);

        let d = &state.decorations[0];
        assert!(d.pos.x >= VIEW_WIDTH && d.pos.x < VIEW_WIDTH + 200.0);
        assert!((50.0..150.0).contains(&d.pos.y));
        assert_eq!(state.decorations.len(), 1);
    }

    #[test]
    fn test_spawn_waits_for_spacing() {
        let mut state = GameState::new(9);
        state.platforms.push(Platform::new(
            VIEW_WIDTH - PLATFORM_SPACING + 1.0,
            300.0,
            PlatformTier::High,
        ));
        let report = replenish(&mut state);
        assert_eq!(report.platforms, 0);
        // Empty collectible list always has room
        assert_eq!(report.collectibles, 1);

        state.platforms[0].pos.x = VIEW_WIDTH - PLATFORM_SPACING - 1.0;
        let report = replenish(&mut state);
        assert_eq!(report.platforms, 1);
        let spawned = &state.platforms[1];
        assert!(spawned.pos.x >= VIEW_WIDTH && spawned.pos.x < VIEW_WIDTH + PLATFORM_SPAWN_JITTER);
        assert!(spawned.tier.height_range().contains(&spawned.top()));
    }

    #[test]
    fn test_spawn_respects_target() {
        let mut state = GameState::new(9);
        for i in 0..PLATFORM_TARGET {
            state
                .platforms
                .push(Platform::new(i as f32 * 10.0, 300.0, PlatformTier::High));
        }
        assert_eq!(replenish(&mut state).platforms, 0);
        assert_eq!(state.platforms.len(), PLATFORM_TARGET);
    }

    #[test]
    fn test_random_tiers_cover_all_bands() {
        let mut state = GameState::new(2024);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            state.platforms.clear();
            replenish(&mut state);
            seen.insert(state.platforms[0].tier);
        }
        assert_eq!(seen.len(), 3);
    }

    proptest! {
        #[test]
        fn decorations_never_leave(seed in any::<u64>(), ticks in 1usize..2000) {
            let mut state = GameState::new(seed);
            populate(&mut state);
            for _ in 0..ticks {
                advance_entities(&mut state);
                replenish(&mut state);
            }
            prop_assert_eq!(state.decorations.len(), DECORATION_COUNT);
        }

        #[test]
        fn spawner_grows_by_at_most_one(seed in any::<u64>(), ticks in 1usize..1500) {
            let mut state = GameState::new(seed);
            populate(&mut state);
            for _ in 0..ticks {
                advance_entities(&mut state);
                let before = (state.platforms.len(), state.collectibles.len());
                let report = replenish(&mut state);
                prop_assert!(report.platforms <= 1 && report.collectibles <= 1);
                prop_assert_eq!(state.platforms.len(), before.0 + report.platforms);
                prop_assert_eq!(state.collectibles.len(), before.1 + report.collectibles);
                prop_assert!(state.platforms.len() <= PLATFORM_TARGET);
                prop_assert!(state.collectibles.len() <= COLLECTIBLE_TARGET);
            }
        }

        #[test]
        fn nothing_visible_is_dropped_and_nothing_gone_is_kept(seed in any::<u64>(), ticks in 1usize..1500) {
            let mut state = GameState::new(seed);
            populate(&mut state);
            for _ in 0..ticks {
                advance_entities(&mut state);
                prop_assert!(state.platforms.iter().all(|p| p.right_edge() >= 0.0));
                prop_assert!(state.collectibles.iter().all(|c| c.right_edge() >= 0.0));
                replenish(&mut state);
            }
        }
    }
}
