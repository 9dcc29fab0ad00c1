//! Click Fruit - A fruit slicing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ballistics, slicing, particles, game state)
//! - `renderer`: WebGPU rendering pipeline and sprite set
//! - `settings`: Player preferences
//! - `audio`: Procedural sound effects (Web Audio playback on wasm)

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (game coordinates, pixels, y down)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    pub const WINDOW_TITLE: &str = "Fruit Ninja";

    /// Frame ticks per real second
    pub const TICK_RATE: u32 = 60;
    /// Real time covered by one tick
    pub const FRAME_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Simulated seconds advanced per tick (the game runs in "slow motion" units)
    pub const SIM_DT: f32 = 0.1;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Downward acceleration in simulated units
    pub const GRAVITY: f32 = 9.81;

    /// Spawn countdown: a projectile launches once the timer exceeds this
    pub const SPAWN_INTERVAL_TICKS: u32 = 30;
    /// Horizontal inset of the launch strip from each window edge
    pub const SPAWN_EDGE_INSET: i32 = 100;
    /// Launch speed range
    pub const LAUNCH_SPEED_MIN: f32 = 80.0;
    pub const LAUNCH_SPEED_MAX: f32 = 110.0;
    /// Launch angle range (degrees, 90 = straight up)
    pub const LAUNCH_ANGLE_MIN_DEG: f32 = 70.0;
    pub const LAUNCH_ANGLE_MAX_DEG: f32 = 110.0;
    /// One in this many launches is a bomb
    pub const BOMB_ODDS: u32 = 3;

    /// Projectiles start and are culled this far below the bottom edge
    pub const OFFSCREEN_MARGIN: f32 = 100.0;
    /// Hit-box half extent of every projectile
    pub const PROJECTILE_RADIUS: f32 = 30.0;
    /// Displayed sprite size (square)
    pub const SPRITE_SIZE: f32 = 80.0;

    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;
    /// Ticks the end message stays up before the loop stops (2 seconds)
    pub const GAME_OVER_HOLD_TICKS: u32 = 2 * TICK_RATE;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
