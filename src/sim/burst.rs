//! Slice particle bursts

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f32::consts::TAU;
use std::ops::{Range, RangeInclusive};

use super::state::{EXPLOSION_COLORS, Particle, ProjectileKind, Rgb};
use crate::polar_to_cartesian;

/// Shape of a burst for one projectile kind
#[derive(Debug, Clone)]
pub struct BurstProfile {
    pub count: usize,
    pub speed: Range<f32>,
    pub radius: RangeInclusive<u32>,
    pub lifetime: Range<f32>,
}

/// Bomb blast
pub static BOMB_BURST: BurstProfile = BurstProfile {
    count: 20,
    speed: 50.0..150.0,
    radius: 2..=5,
    lifetime: 0.5..1.5,
};

/// Fruit splash
pub static FRUIT_BURST: BurstProfile = BurstProfile {
    count: 15,
    speed: 30.0..100.0,
    radius: 3..=6,
    lifetime: 0.5..1.0,
};

impl BurstProfile {
    pub fn for_kind(kind: ProjectileKind) -> &'static BurstProfile {
        match kind {
            ProjectileKind::Bomb => &BOMB_BURST,
            ProjectileKind::Fruit(_) => &FRUIT_BURST,
        }
    }
}

/// Generate the burst for a projectile of `kind` sliced at `pos`
pub fn spawn_burst<R: Rng + ?Sized>(rng: &mut R, kind: ProjectileKind, pos: Vec2) -> Vec<Particle> {
    let profile = BurstProfile::for_kind(kind);
    (0..profile.count)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(profile.speed.clone());
            let radius = rng.random_range(profile.radius.clone()) as f32;
            let color = match kind {
                ProjectileKind::Bomb => *EXPLOSION_COLORS.choose(rng).unwrap_or(&Rgb::WHITE),
                ProjectileKind::Fruit(fruit) => fruit.juice_color(),
            };
            let lifetime = rng.random_range(profile.lifetime.clone());
            Particle {
                pos,
                vel: polar_to_cartesian(speed, angle),
                color,
                radius,
                lifetime,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::FruitKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_bomb_burst() {
        let mut rng = Pcg32::seed_from_u64(11);
        let pos = Vec2::new(300.0, 200.0);
        let burst = spawn_burst(&mut rng, ProjectileKind::Bomb, pos);
        assert_eq!(burst.len(), 20);
        for p in &burst {
            assert_eq!(p.pos, pos);
            let speed = p.vel.length();
            assert!(speed >= 49.99 && speed < 150.01);
            assert!((2.0..=5.0).contains(&p.radius));
            assert!(p.lifetime >= 0.5 && p.lifetime < 1.5);
            assert!(EXPLOSION_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn test_fruit_burst_uses_juice_color() {
        let mut rng = Pcg32::seed_from_u64(12);
        let burst = spawn_burst(&mut rng, ProjectileKind::Fruit(FruitKind::Eggplant), Vec2::ZERO);
        assert_eq!(burst.len(), 15);
        for p in &burst {
            assert_eq!(p.color, Rgb::PURPLE);
            let speed = p.vel.length();
            assert!(speed >= 29.99 && speed < 100.01);
            assert!((3.0..=6.0).contains(&p.radius));
            assert!(p.lifetime >= 0.5 && p.lifetime < 1.0);
        }
    }
}
