//! Sprite set
//!
//! Every image the game shows is built once at startup as a triangle mesh and
//! scaled to its fixed display size: fruit and bombs to `SPRITE_SIZE` square,
//! the wall backdrop to the full window. Frames then only translate them.

use glam::Vec2;

use super::shapes::{bounds, circle, ellipse, line, rect};
use super::vertex::{Vertex, colors};
use crate::consts::{HEIGHT, SPRITE_SIZE, WIDTH};
use crate::sim::{FruitKind, ProjectileKind};

/// Image identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Apple,
    Watermelon,
    Lemon,
    Eggplant,
    Bomb,
    Wall,
}

impl SpriteId {
    pub const ALL: [SpriteId; 6] = [
        SpriteId::Apple,
        SpriteId::Watermelon,
        SpriteId::Lemon,
        SpriteId::Eggplant,
        SpriteId::Bomb,
        SpriteId::Wall,
    ];

    /// Image shown for a projectile
    pub fn for_kind(kind: ProjectileKind) -> Self {
        match kind {
            ProjectileKind::Bomb => SpriteId::Bomb,
            ProjectileKind::Fruit(FruitKind::Apple) => SpriteId::Apple,
            ProjectileKind::Fruit(FruitKind::Watermelon) => SpriteId::Watermelon,
            ProjectileKind::Fruit(FruitKind::Lemon) => SpriteId::Lemon,
            ProjectileKind::Fruit(FruitKind::Eggplant) => SpriteId::Eggplant,
        }
    }

    /// Fixed display size
    pub fn display_size(self) -> Vec2 {
        match self {
            SpriteId::Wall => Vec2::new(WIDTH, HEIGHT),
            _ => Vec2::splat(SPRITE_SIZE),
        }
    }
}

/// A mesh centered on the origin, already at display size
#[derive(Debug, Clone)]
pub struct Sprite {
    vertices: Vec<Vertex>,
}

impl Sprite {
    /// Stretch an authored mesh so its bounds are exactly `size`, centered on the origin
    pub fn fit(mesh: Vec<Vertex>, size: Vec2) -> Self {
        let Some((min, max)) = bounds(&mesh) else {
            return Self { vertices: mesh };
        };
        let center = (min + max) * 0.5;
        let scale = size / (max - min).max(Vec2::splat(f32::EPSILON));

        let vertices = mesh
            .into_iter()
            .map(|v| {
                let p = (Vec2::from(v.position) - center) * scale;
                Vertex::new(p.x, p.y, v.color)
            })
            .collect();
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Append this sprite centered at `center`
    pub fn draw_at(&self, center: Vec2, out: &mut Vec<Vertex>) {
        out.extend(self.vertices.iter().map(|v| v.offset(center.x, center.y)));
    }
}

/// All sprites, built once
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    apple: Sprite,
    watermelon: Sprite,
    lemon: Sprite,
    eggplant: Sprite,
    bomb: Sprite,
    wall: Sprite,
}

impl SpriteSheet {
    /// Build and scale every sprite. `segments` controls round-shape smoothness.
    pub fn load(segments: u32) -> Self {
        let build = |id: SpriteId| Sprite::fit(author(id, segments), id.display_size());
        let sheet = Self {
            apple: build(SpriteId::Apple),
            watermelon: build(SpriteId::Watermelon),
            lemon: build(SpriteId::Lemon),
            eggplant: build(SpriteId::Eggplant),
            bomb: build(SpriteId::Bomb),
            wall: build(SpriteId::Wall),
        };
        log::info!(
            "Sprites loaded: {} vertices",
            SpriteId::ALL
                .iter()
                .map(|&id| sheet.get(id).vertices().len())
                .sum::<usize>()
        );
        sheet
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::Apple => &self.apple,
            SpriteId::Watermelon => &self.watermelon,
            SpriteId::Lemon => &self.lemon,
            SpriteId::Eggplant => &self.eggplant,
            SpriteId::Bomb => &self.bomb,
            SpriteId::Wall => &self.wall,
        }
    }
}

/// Raw artwork in a unit box (y down). `fit` rescales it.
fn author(id: SpriteId, segments: u32) -> Vec<Vertex> {
    let mut m = Vec::new();
    match id {
        SpriteId::Apple => {
            m.extend(circle(Vec2::new(0.0, 0.08), 0.4, colors::APPLE_SKIN, segments));
            m.extend(ellipse(
                Vec2::new(-0.15, -0.05),
                Vec2::new(0.08, 0.12),
                colors::APPLE_SHINE,
                segments,
            ));
            m.extend(line(Vec2::new(0.0, -0.28), Vec2::new(0.05, -0.48), 0.06, colors::STEM));
            m.extend(ellipse(Vec2::new(0.16, -0.4), Vec2::new(0.12, 0.06), colors::LEAF, segments));
        }
        SpriteId::Watermelon => {
            m.extend(circle(Vec2::ZERO, 0.5, colors::MELON_RIND, segments));
            for x in [-0.3, -0.1, 0.1, 0.3] {
                let half_height = (0.25f32 - x * x).sqrt() * 0.9;
                m.extend(ellipse(
                    Vec2::new(x, 0.0),
                    Vec2::new(0.05, half_height),
                    colors::MELON_STRIPE,
                    segments,
                ));
            }
        }
        SpriteId::Lemon => {
            m.extend(ellipse(Vec2::ZERO, Vec2::new(0.42, 0.32), colors::LEMON_SKIN, segments));
            m.extend(circle(Vec2::new(-0.43, 0.0), 0.07, colors::LEMON_TIP, segments));
            m.extend(circle(Vec2::new(0.43, 0.0), 0.07, colors::LEMON_TIP, segments));
        }
        SpriteId::Eggplant => {
            m.extend(ellipse(
                Vec2::new(0.0, 0.1),
                Vec2::new(0.28, 0.4),
                colors::EGGPLANT_SKIN,
                segments,
            ));
            m.extend(ellipse(
                Vec2::new(0.0, -0.28),
                Vec2::new(0.22, 0.1),
                colors::EGGPLANT_CAP,
                segments,
            ));
            m.extend(line(
                Vec2::new(0.0, -0.32),
                Vec2::new(0.0, -0.5),
                0.06,
                colors::EGGPLANT_CAP,
            ));
        }
        SpriteId::Bomb => {
            m.extend(circle(Vec2::new(0.0, 0.08), 0.42, colors::BOMB_BODY, segments));
            m.extend(circle(Vec2::new(-0.15, -0.06), 0.08, colors::BOMB_SHINE, segments));
            m.extend(rect(Vec2::new(-0.08, -0.42), Vec2::new(0.08, -0.3), colors::BOMB_BODY));
            m.extend(line(Vec2::new(0.0, -0.42), Vec2::new(0.12, -0.5), 0.04, colors::FUSE));
            m.extend(circle(Vec2::new(0.14, -0.5), 0.05, colors::SPARK, segments));
        }
        SpriteId::Wall => {
            // Brick courses, authored at window scale
            let brick = Vec2::new(80.0, 40.0);
            let mortar = 4.0;
            m.extend(rect(Vec2::ZERO, Vec2::new(WIDTH, HEIGHT), colors::WALL_MORTAR));
            let rows = (HEIGHT / brick.y).ceil() as u32;
            for row in 0..rows {
                let y = row as f32 * brick.y;
                let shift = if row % 2 == 0 { 0.0 } else { -brick.x / 2.0 };
                let mut x = shift;
                while x < WIDTH {
                    let min = Vec2::new(x.max(0.0), y) + Vec2::splat(mortar / 2.0);
                    let max = (Vec2::new(x + brick.x, y + brick.y) - Vec2::splat(mortar / 2.0))
                        .min(Vec2::new(WIDTH, HEIGHT));
                    if max.x > min.x {
                        m.extend(rect(min, max, colors::WALL_BRICK));
                    }
                    x += brick.x;
                }
            }
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sprite_scaled_to_display_size() {
        let sheet = SpriteSheet::load(16);
        for id in SpriteId::ALL {
            let sprite = sheet.get(id);
            let (min, max) = bounds(sprite.vertices()).unwrap();
            let extent = max - min;
            let expected = id.display_size();
            assert!(
                (extent - expected).abs().max_element() < 1e-2,
                "{:?}: {:?}",
                id,
                extent
            );
            // Centered on the origin
            assert!(((min + max) * 0.5).length() < 1e-2, "{:?}", id);
        }
    }

    #[test]
    fn test_projectile_sprites() {
        assert_eq!(SpriteId::for_kind(ProjectileKind::Bomb), SpriteId::Bomb);
        assert_eq!(
            SpriteId::for_kind(ProjectileKind::Fruit(FruitKind::Lemon)),
            SpriteId::Lemon
        );
        assert_eq!(SpriteId::Apple.display_size(), Vec2::splat(80.0));
    }

    #[test]
    fn test_draw_at_translates() {
        let sheet = SpriteSheet::load(8);
        let mut out = Vec::new();
        sheet.get(SpriteId::Bomb).draw_at(Vec2::new(100.0, 50.0), &mut out);
        let (min, max) = bounds(&out).unwrap();
        assert!(((min + max) * 0.5 - Vec2::new(100.0, 50.0)).length() < 1e-2);
    }
}
