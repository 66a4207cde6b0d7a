//! Game state and core simulation types

use std::ops::Range;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Whether the player is resting on a support or in the air
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stance {
    #[default]
    Grounded,
    Airborne,
}

/// The unicorn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/tick, positive = down)
    pub vel_y: f32,
    pub stance: Stance,
    /// Resting y for the next integration step (ground or platform top minus height)
    pub support_y: f32,
    /// Sprite animation phase, runs faster while falling
    pub anim_phase: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            stance: Stance::Grounded,
            support_y: GROUND_Y,
            anim_phase: 0.0,
        }
    }
}

impl Player {
    /// y of the player's feet
    #[inline]
    pub fn foot(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.stance == Stance::Grounded
    }

    /// Start a jump. Ignored while airborne; returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if self.stance == Stance::Airborne {
            return false;
        }
        self.vel_y = JUMP_POWER;
        self.stance = Stance::Airborne;
        true
    }

    /// Snap onto a support at `rest_y`
    pub fn land(&mut self, rest_y: f32) {
        self.pos.y = rest_y;
        self.vel_y = 0.0;
        self.stance = Stance::Grounded;
    }
}

/// Vertical band a platform spawns in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformTier {
    High,
    Mid,
    Low,
}

impl PlatformTier {
    pub const ALL: [PlatformTier; 3] = [PlatformTier::High, PlatformTier::Mid, PlatformTier::Low];

    /// Range of top-edge y values for this tier (half-open, bands do not overlap)
    pub fn height_range(self) -> Range<f32> {
        match self {
            PlatformTier::High => 280.0..320.0,
            PlatformTier::Mid => 340.0..380.0,
            PlatformTier::Low => 380.0..420.0,
        }
    }

    /// Tier for the i-th platform of the opening layout (High, Mid, Low, High, ...)
    pub fn cycled(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Uniform choice among the three tiers
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Random top-edge y inside this tier
    pub fn sample_height(self, rng: &mut impl Rng) -> f32 {
        rng.random_range(self.height_range())
    }
}

/// A cloud the unicorn can stand on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub tier: PlatformTier,
}

impl Platform {
    pub fn new(x: f32, y: f32, tier: PlatformTier) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
            tier,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A rainbow worth points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
    /// Bobbing animation phase (radians)
    pub bob_phase: f32,
}

impl Collectible {
    pub fn new(x: f32, y: f32, bob_phase: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::splat(COLLECTIBLE_SIZE),
            collected: false,
            bob_phase,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// A background cloud in the parallax layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoration {
    pub pos: Vec2,
    pub size: Vec2,
    /// Own scroll speed (pixels/tick)
    pub speed: f32,
    pub opacity: f32,
}

impl Decoration {
    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

/// Complete game state, owned by the loop driver
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub player: Player,
    /// Platforms in spawn order
    pub platforms: Vec<Platform>,
    /// Collectibles in spawn order
    pub collectibles: Vec<Collectible>,
    /// Parallax clouds (fixed count, recycled)
    pub decorations: Vec<Decoration>,
    pub score: u64,
    /// Total distance scrolled (drives the grass pattern)
    pub scroll_offset: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an empty world with the player on the ground
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            player: Player::default(),
            platforms: Vec::new(),
            collectibles: Vec::new(),
            decorations: Vec::new(),
            score: 0,
            scroll_offset: 0.0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}
