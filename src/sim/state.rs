//! Game state and core simulation types
//!
//! Everything the loop mutates lives here. Rendering only reads it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);

    /// Normalized RGBA with the given alpha
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            alpha,
        ]
    }
}

/// Colors a bomb blast draws from
pub const EXPLOSION_COLORS: [Rgb; 4] = [Rgb::RED, Rgb::ORANGE, Rgb::YELLOW, Rgb::WHITE];

/// Fruit varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Watermelon,
    Lemon,
    Eggplant,
}

impl FruitKind {
    pub const ALL: [FruitKind; 4] = [
        FruitKind::Apple,
        FruitKind::Watermelon,
        FruitKind::Lemon,
        FruitKind::Eggplant,
    ];

    /// Juice color used for the slice burst
    pub fn juice_color(self) -> Rgb {
        match self {
            FruitKind::Apple | FruitKind::Watermelon => Rgb::RED,
            FruitKind::Lemon => Rgb::YELLOW,
            FruitKind::Eggplant => Rgb::PURPLE,
        }
    }
}

/// What a projectile is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    Fruit(FruitKind),
    /// Hazard: slicing it costs a life
    Bomb,
}

impl ProjectileKind {
    #[inline]
    pub fn is_hazard(self) -> bool {
        matches!(self, ProjectileKind::Bomb)
    }
}

/// A launched fruit or bomb following a ballistic arc
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    /// Launch position
    pub origin: Vec2,
    /// Current position
    pub pos: Vec2,
    /// Hit-box half extent
    pub radius: f32,
    /// Launch speed
    pub speed: f32,
    /// Launch angle (radians, measured from +x toward screen-up)
    pub angle: f32,
    /// Simulated seconds since launch
    pub time: f32,
    pub sliced: bool,
}

impl Projectile {
    pub fn new(id: u32, kind: ProjectileKind, origin: Vec2, speed: f32, angle: f32) -> Self {
        Self {
            id,
            kind,
            origin,
            pos: origin,
            radius: PROJECTILE_RADIUS,
            speed,
            angle,
            time: 0.0,
            sliced: false,
        }
    }

    /// Closed-form position `t` simulated seconds after launch.
    ///
    /// Screen y grows downward, so the upward launch component is subtracted
    /// and gravity pulls `y` back up toward larger values.
    pub fn position_at(&self, t: f32) -> Vec2 {
        let x = self.origin.x + self.speed * self.angle.cos() * t;
        let y = self.origin.y - (self.speed * self.angle.sin() * t - 0.5 * GRAVITY * t * t);
        Vec2::new(x, y)
    }

    /// Advance the flight clock and recompute position
    pub fn update(&mut self, dt: f32) {
        self.time += dt;
        self.pos = self.position_at(self.time);
    }

    /// True once the projectile has fallen past the bottom cull line
    pub fn is_offscreen(&self) -> bool {
        self.pos.y > HEIGHT + OFFSCREEN_MARGIN
    }
}

/// A short-lived cosmetic particle from a slice burst
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    pub radius: f32,
    /// Simulated seconds left to live
    pub lifetime: f32,
}

impl Particle {
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen by the player or by losing focus
    Paused,
    /// End message is up; the loop stops once `hold_ticks` runs out
    GameOver { hold_ticks: u32 },
    /// Loop should stop
    Finished,
}

/// Things that happened during a tick, for audio/HUD/logging
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Spawned { id: u32, kind: ProjectileKind },
    Sliced { id: u32, kind: ProjectileKind, pos: Vec2 },
    LifeLost { lives: u8 },
    GameOver,
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Remaining lives
    pub lives: u8,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Active projectiles, in spawn order
    pub projectiles: Vec<Projectile>,
    /// Active particles, in spawn order
    pub particles: Vec<Particle>,
    /// Events raised since the shell last drained them
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new run with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: STARTING_LIVES,
            spawn_timer: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            projectiles: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Launch a projectile with explicit parameters (angle in radians)
    pub fn launch(&mut self, kind: ProjectileKind, origin: Vec2, speed: f32, angle: f32) -> u32 {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile::new(id, kind, origin, speed, angle));
        self.events.push(GameEvent::Spawned { id, kind });
        id
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. } | GamePhase::Finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_straight_up_launch_rises_then_falls() {
        let p = Projectile::new(1, ProjectileKind::Bomb, Vec2::new(400.0, 700.0), 100.0, FRAC_PI_2);
        let apex_t = 100.0 / GRAVITY;
        let apex = p.position_at(apex_t);
        assert!((apex.x - 400.0).abs() < 1e-3);
        assert!(apex.y < 700.0);
        // Symmetric flight: back at launch height after twice the apex time
        let landing = p.position_at(2.0 * apex_t);
        assert!((landing.y - 700.0).abs() < 0.05);
    }

    #[test]
    fn test_update_accumulates_time() {
        let mut p = Projectile::new(
            1,
            ProjectileKind::Fruit(FruitKind::Lemon),
            Vec2::new(200.0, 700.0),
            90.0,
            80f32.to_radians(),
        );
        for _ in 0..5 {
            p.update(SIM_DT);
        }
        assert!((p.time - 0.5).abs() < 1e-5);
        assert_eq!(p.pos, p.position_at(p.time));
    }

    #[test]
    fn test_offscreen_threshold_is_strict() {
        let mut p = Projectile::new(1, ProjectileKind::Bomb, Vec2::ZERO, 0.0, 0.0);
        p.pos.y = HEIGHT + OFFSCREEN_MARGIN;
        assert!(!p.is_offscreen());
        p.pos.y += 0.01;
        assert!(p.is_offscreen());
    }

    #[test]
    fn test_particle_expires_at_zero() {
        let mut particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(10.0, -5.0),
            color: Rgb::RED,
            radius: 3.0,
            lifetime: 0.2,
        };
        particle.update(0.1);
        assert!(!particle.is_expired());
        assert!((particle.pos - Vec2::new(1.0, -0.5)).length() < 1e-5);
        particle.update(0.1);
        assert!(particle.is_expired());
    }

    #[test]
    fn test_juice_colors() {
        assert_eq!(FruitKind::Apple.juice_color(), Rgb::RED);
        assert_eq!(FruitKind::Watermelon.juice_color(), Rgb::RED);
        assert_eq!(FruitKind::Lemon.juice_color(), Rgb::YELLOW);
        assert_eq!(FruitKind::Eggplant.juice_color(), Rgb::PURPLE);
        assert!(ProjectileKind::Bomb.is_hazard());
        assert!(!ProjectileKind::Fruit(FruitKind::Apple).is_hazard());
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(7);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.projectiles.is_empty());
        assert!(!state.is_over());
    }
}
