//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod burst;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use burst::{BurstProfile, spawn_burst};
pub use collision::{HitBox, projectiles_under};
pub use spawn::{Launch, advance_spawn_timer, roll_launch};
pub use state::{
    EXPLOSION_COLORS, FruitKind, GameEvent, GamePhase, GameState, Particle, Projectile,
    ProjectileKind, Rgb,
};
pub use tick::{TickInput, slice_at, tick};
