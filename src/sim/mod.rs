//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (sequence order decides ties)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionReport, resolve_collisions};
pub use physics::integrate;
pub use spawn::{advance_entities, populate, replenish};
pub use state::{Collectible, Decoration, GameState, Platform, PlatformTier, Player, Stance};
pub use tick::{TickInput, tick};
