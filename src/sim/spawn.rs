//! Projectile launching
//!
//! Launches happen from a strip below the window. Each one rolls a start
//! column, a speed, an angle and whether it is a bomb.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::{FruitKind, GameState, ProjectileKind};
use crate::consts::*;

/// Rolled launch parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub kind: ProjectileKind,
    pub origin: Vec2,
    pub speed: f32,
    /// Radians
    pub angle: f32,
}

/// Roll a random launch
pub fn roll_launch<R: Rng + ?Sized>(rng: &mut R) -> Launch {
    let x = rng.random_range(SPAWN_EDGE_INSET..=WIDTH as i32 - SPAWN_EDGE_INSET) as f32;
    let origin = Vec2::new(x, HEIGHT + OFFSCREEN_MARGIN);
    let speed = rng.random_range(LAUNCH_SPEED_MIN..LAUNCH_SPEED_MAX);
    let angle = rng
        .random_range(LAUNCH_ANGLE_MIN_DEG..LAUNCH_ANGLE_MAX_DEG)
        .to_radians();

    let kind = if rng.random_ratio(1, BOMB_ODDS) {
        ProjectileKind::Bomb
    } else {
        // ALL is non-empty
        let fruit = FruitKind::ALL
            .choose(rng)
            .copied()
            .unwrap_or(FruitKind::Apple);
        ProjectileKind::Fruit(fruit)
    };

    Launch {
        kind,
        origin,
        speed,
        angle,
    }
}

/// Advance the spawn countdown by one tick, launching when it runs out.
///
/// Returns the new projectile's ID if one launched.
pub fn advance_spawn_timer(state: &mut GameState) -> Option<u32> {
    state.spawn_timer += 1;
    if state.spawn_timer <= SPAWN_INTERVAL_TICKS {
        return None;
    }
    state.spawn_timer = 0;

    let launch = roll_launch(&mut state.rng);
    let id = state.launch(launch.kind, launch.origin, launch.speed, launch.angle);
    log::debug!(
        "Launched {:?} #{} at x={} speed={:.1} angle={:.1}°",
        launch.kind,
        id,
        launch.origin.x,
        launch.speed,
        launch.angle.to_degrees()
    );
    Some(id)
}
