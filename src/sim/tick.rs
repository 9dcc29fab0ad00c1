//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::burst::spawn_burst;
use super::collision::projectiles_under;
use super::spawn::advance_spawn_timer;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer-down positions since the last tick (game coordinates)
    pub clicks: Vec<Vec2>,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Input with a single click
    pub fn click(pos: Vec2) -> Self {
        Self {
            clicks: vec![pos],
            ..Default::default()
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Paused | GamePhase::Finished => return,
        GamePhase::GameOver { hold_ticks } => {
            // Frozen while the end message is up
            state.phase = if hold_ticks <= 1 {
                log::info!("Run over after {} ticks", state.time_ticks);
                GamePhase::Finished
            } else {
                GamePhase::GameOver {
                    hold_ticks: hold_ticks - 1,
                }
            };
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    for &click in &input.clicks {
        slice_at(state, click);
    }

    advance_spawn_timer(state);

    for projectile in &mut state.projectiles {
        projectile.update(dt);
    }
    state.projectiles.retain(|p| !p.sliced && !p.is_offscreen());

    for particle in &mut state.particles {
        particle.update(dt);
    }
    state.particles.retain(|p| !p.is_expired());

    if state.lives == 0 {
        log::info!("Game over (seed {})", state.seed);
        state.phase = GamePhase::GameOver {
            hold_ticks: GAME_OVER_HOLD_TICKS,
        };
        state.events.push(GameEvent::GameOver);
    }
}

/// Slice everything under `point`.
///
/// Hit projectiles burst into particles and leave the field; bombs cost a life.
/// Returns how many projectiles were sliced.
pub fn slice_at(state: &mut GameState, point: Vec2) -> usize {
    let hits = projectiles_under(&state.projectiles, point);
    for &idx in &hits {
        let projectile = &mut state.projectiles[idx];
        projectile.sliced = true;
        let (id, kind, pos) = (projectile.id, projectile.kind, projectile.pos);

        let burst = spawn_burst(&mut state.rng, kind, pos);
        state.particles.extend(burst);
        state.events.push(GameEvent::Sliced { id, kind, pos });

        if kind.is_hazard() {
            state.lives = state.lives.saturating_sub(1);
            log::info!("Bomb #{} sliced, {} lives left", id, state.lives);
            state.events.push(GameEvent::LifeLost { lives: state.lives });
        } else {
            log::debug!("Sliced {:?} #{}", kind, id);
        }
    }
    state.projectiles.retain(|p| !p.sliced);
    hits.len()
}
