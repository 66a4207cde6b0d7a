//! Collision detection and response for the scrolling world
//!
//! Two passes per tick: rainbows are picked up on any box overlap, then the
//! clouds decide what the unicorn is standing on for the next integration
//! step.

use glam::Vec2;

use super::state::{GameState, Platform, Player};
use crate::consts::*;

/// Axis-aligned bounding box in world pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Shrink horizontally by `inset` on both sides
    pub fn inset_x(&self, inset: f32) -> Self {
        Self {
            min: Vec2::new(self.min.x + inset, self.min.y),
            max: Vec2::new(self.max.x - inset, self.max.y),
        }
    }

    /// Horizontal spans overlap (strict)
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.min.x < right && self.max.x > left
    }
}

/// Outcome of one collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Collectibles taken this tick
    pub collected: u32,
    /// Index of the platform now supporting the player (last match wins)
    pub support: Option<usize>,
    /// The player snapped onto a platform this tick
    pub landed: bool,
}

/// How a platform relates to the player this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contact {
    /// Falling into the band just below the top surface
    Landing,
    /// Feet resting on the top surface
    Standing,
}

fn platform_contact(player: &Player, platform: &Platform) -> Option<Contact> {
    let feet = player.bounds().inset_x(PLATFORM_EDGE_INSET);
    if !feet.overlaps_x(platform.pos.x, platform.right_edge()) {
        return None;
    }

    let foot = player.foot();
    let top = platform.top();
    if foot >= top && foot <= top + LANDING_DEPTH && player.vel_y >= 0.0 {
        Some(Contact::Landing)
    } else if (foot - top).abs() <= STANDING_TOLERANCE {
        Some(Contact::Standing)
    } else {
        None
    }
}

/// Run the pickup and support passes against the current state
pub fn resolve_collisions(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();

    // Pickups: collected items stay in the list until they scroll off
    let player_box = state.player.bounds();
    for collectible in state.collectibles.iter_mut().filter(|c| !c.collected) {
        if player_box.overlaps(&collectible.bounds()) {
            collectible.collected = true;
            state.score += COLLECTIBLE_REWARD;
            report.collected += 1;
        }
    }
    if report.collected > 0 {
        log::debug!(
            "Collected {} rainbow(s), score {}",
            report.collected,
            state.score
        );
    }

    // Support: a landing snap changes the player's feet, so later platforms
    // are tested against the snapped position
    let player = &mut state.player;
    let mut support_y = GROUND_Y;
    for (index, platform) in state.platforms.iter().enumerate() {
        let rest_y = platform.top() - player.size.y;
        match platform_contact(player, platform) {
            Some(Contact::Landing) => {
                player.land(rest_y);
                support_y = rest_y;
                report.support = Some(index);
                report.landed = true;
            }
            Some(Contact::Standing) => {
                support_y = rest_y;
                report.support = Some(index);
            }
            None => {}
        }
    }

    // Off every cloud: fall back to the ground
    player.support_y = support_y;

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Collectible, PlatformTier, Stance};

    fn state_with_player_at(y: f32, vel_y: f32) -> GameState {
        let mut state = GameState::new(1);
        state.player.pos.y = y;
        state.player.vel_y = vel_y;
        state.player.stance = if vel_y == 0.0 && y == GROUND_Y {
            Stance::Grounded
        } else {
            Stance::Airborne
        };
        state
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_pos_size(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::from_pos_size(Vec2::splat(5.0), Vec2::splat(10.0));
        let touching = Aabb::from_pos_size(Vec2::new(10.0, 0.0), Vec2::splat(10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
    }

    #[test]
    fn test_overlapping_collectible_is_collected_once() {
        let mut state = GameState::new(1);
        let p = state.player.pos;
        state.collectibles.push(Collectible::new(p.x, p.y, 0.0));

        let report = resolve_collisions(&mut state);
        assert_eq!(report.collected, 1);
        assert!(state.collectibles[0].collected);
        assert_eq!(state.score, COLLECTIBLE_REWARD);

        // Still overlapping next tick - no double count
        let report = resolve_collisions(&mut state);
        assert_eq!(report.collected, 0);
        assert_eq!(state.score, COLLECTIBLE_REWARD);
        assert_eq!(state.collectibles.len(), 1);
    }

    #[test]
    fn test_distant_collectible_untouched() {
        let mut state = GameState::new(1);
        state.collectibles.push(Collectible::new(700.0, 250.0, 0.0));

        let report = resolve_collisions(&mut state);
        assert_eq!(report.collected, 0);
        assert!(!state.collectibles[0].collected);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_landing_snaps_player_onto_platform() {
        // Feet 10px below the cloud top, falling
        let top = 350.0;
        let mut state = state_with_player_at(top - PLAYER_HEIGHT + 10.0, 5.0);
        state
            .platforms
            .push(Platform::new(PLAYER_X, top, PlatformTier::Mid));

        let report = resolve_collisions(&mut state);
        assert!(report.landed);
        assert_eq!(report.support, Some(0));
        assert_eq!(state.player.pos.y, top - PLAYER_HEIGHT);
        assert_eq!(state.player.vel_y, 0.0);
        assert!(state.player.is_grounded());
        assert_eq!(state.player.support_y, top - PLAYER_HEIGHT);
    }

    #[test]
    fn test_rising_player_passes_through() {
        let top = 350.0;
        let mut state = state_with_player_at(top - PLAYER_HEIGHT + 10.0, -8.0);
        state
            .platforms
            .push(Platform::new(PLAYER_X, top, PlatformTier::Mid));

        let report = resolve_collisions(&mut state);
        assert!(!report.landed);
        assert_eq!(report.support, None);
        assert_eq!(state.player.vel_y, -8.0);
        assert_eq!(state.player.support_y, GROUND_Y);
    }

    #[test]
    fn test_standing_keeps_support_without_velocity_check() {
        let top = 300.0;
        // Feet 3px above the surface while moving up slightly
        let mut state = state_with_player_at(top - PLAYER_HEIGHT - 3.0, -0.5);
        state
            .platforms
            .push(Platform::new(PLAYER_X, top, PlatformTier::High));

        let report = resolve_collisions(&mut state);
        assert!(!report.landed);
        assert_eq!(report.support, Some(0));
        assert_eq!(state.player.support_y, top - PLAYER_HEIGHT);
    }

    #[test]
    fn test_edge_grazing_does_not_land() {
        let top = 350.0;
        let mut state = state_with_player_at(top - PLAYER_HEIGHT + 5.0, 4.0);
        // Cloud's right edge reaches only 5px into the player box
        let x = PLAYER_X - PLATFORM_WIDTH + 5.0;
        state.platforms.push(Platform::new(x, top, PlatformTier::Mid));

        let report = resolve_collisions(&mut state);
        assert!(!report.landed);
        assert_eq!(state.player.support_y, GROUND_Y);
    }

    #[test]
    fn test_walking_off_platform_reverts_to_ground() {
        let top = 380.0;
        let mut state = state_with_player_at(top - PLAYER_HEIGHT, 0.0);
        state.player.support_y = top - PLAYER_HEIGHT;
        state.player.stance = Stance::Grounded;
        // Cloud already scrolled past the player
        state.platforms.push(Platform::new(0.0, top, PlatformTier::Low));

        let report = resolve_collisions(&mut state);
        assert_eq!(report.support, None);
        assert_eq!(state.player.support_y, GROUND_Y);
    }

    #[test]
    fn test_overlapping_platforms_last_in_order_wins() {
        // Feet inside the landing band of both clouds
        let mut state = state_with_player_at(360.0 - PLAYER_HEIGHT + 2.0, 3.0);
        state
            .platforms
            .push(Platform::new(PLAYER_X, 360.0, PlatformTier::Mid));
        state
            .platforms
            .push(Platform::new(PLAYER_X + 20.0, 362.0, PlatformTier::Mid));

        let valid = [360.0 - PLAYER_HEIGHT, 362.0 - PLAYER_HEIGHT];
        let report = resolve_collisions(&mut state);
        assert!(valid.contains(&state.player.support_y));
        // Sequence order is pinned here: the second cloud is evaluated last
        assert_eq!(report.support, Some(1));
        assert_eq!(state.player.support_y, 362.0 - PLAYER_HEIGHT);
    }
}
