//! Unicorn Dash - A side-scrolling cloud-hopping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `driver`: Frame loop state machine (loading gate, running, stopped)
//! - `assets`: Counted barrier over the sprite image loads
//! - `headless`: Windowless autopilot runs for the native binary
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Player preferences

pub mod assets;
pub mod driver;
pub mod headless;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetError, AssetGate, AssetId};
pub use driver::{FrameOutcome, LoopDriver, LoopPhase};
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical viewport size (world pixels, y grows downward)
    pub const VIEW_WIDTH: f32 = 1000.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to vertical velocity every tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied by a jump (negative = up)
    pub const JUMP_POWER: f32 = -18.0;
    /// Player's resting y on the ground
    pub const GROUND_Y: f32 = 450.0;

    /// Player defaults - the unicorn never moves horizontally, the world does
    pub const PLAYER_X: f32 = 200.0;
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;

    /// Horizontal distance platforms and collectibles travel per tick
    pub const SCROLL_SPEED: f32 = 4.0;

    /// Platform (cloud) defaults
    pub const PLATFORM_WIDTH: f32 = 150.0;
    pub const PLATFORM_HEIGHT: f32 = 80.0;
    pub const PLATFORM_TARGET: usize = 12;
    /// A new platform spawns only once the last one is this far inside the right edge
    pub const PLATFORM_SPACING: f32 = 120.0;
    pub const PLATFORM_SPAWN_JITTER: f32 = 80.0;

    /// Collectible (rainbow) defaults
    pub const COLLECTIBLE_SIZE: f32 = 60.0;
    pub const COLLECTIBLE_TARGET: usize = 10;
    pub const COLLECTIBLE_SPACING: f32 = 200.0;
    pub const COLLECTIBLE_SPAWN_JITTER: f32 = 150.0;
    pub const COLLECTIBLE_MIN_Y: f32 = 200.0;
    pub const COLLECTIBLE_MAX_Y: f32 = 350.0;
    /// Score awarded per collectible
    pub const COLLECTIBLE_REWARD: u64 = 10;

    /// Background clouds (parallax layer)
    pub const DECORATION_COUNT: usize = 8;

    /// Landing band below a platform's top surface
    pub const LANDING_DEPTH: f32 = 25.0;
    /// Foot-to-top tolerance for staying on a platform
    pub const STANDING_TOLERANCE: f32 = 5.0;
    /// Horizontal inset of the player box for platform tests
    pub const PLATFORM_EDGE_INSET: f32 = 10.0;
}
