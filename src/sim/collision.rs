//! Pointer hit testing
//!
//! Slicing uses an axis-aligned box around each projectile rather than its
//! round silhouette, so a click near a sprite's corner still counts.

use glam::Vec2;

use super::state::Projectile;

/// Axis-aligned box given by its corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl HitBox {
    /// Square box of half extent `half` centered on `center`
    pub fn around(center: Vec2, half: f32) -> Self {
        Self {
            min: center - Vec2::splat(half),
            max: center + Vec2::splat(half),
        }
    }

    /// Edges are inclusive
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl Projectile {
    pub fn hit_box(&self) -> HitBox {
        HitBox::around(self.pos, self.radius)
    }

    /// Whether a pointer press at `point` slices this projectile
    pub fn is_hit_by(&self, point: Vec2) -> bool {
        self.hit_box().contains(point)
    }
}

/// Indices of every projectile under `point`, in collection order
pub fn projectiles_under(projectiles: &[Projectile], point: Vec2) -> Vec<usize> {
    projectiles
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_hit_by(point))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{FruitKind, ProjectileKind};

    fn fruit_at(id: u32, x: f32, y: f32) -> Projectile {
        Projectile::new(id, ProjectileKind::Fruit(FruitKind::Apple), Vec2::new(x, y), 0.0, 0.0)
    }

    #[test]
    fn test_hit_box_edges_inclusive() {
        let p = fruit_at(1, 100.0, 100.0);
        assert!(p.is_hit_by(Vec2::new(70.0, 70.0)));
        assert!(p.is_hit_by(Vec2::new(130.0, 130.0)));
        assert!(p.is_hit_by(Vec2::new(100.0, 130.0)));
        assert!(!p.is_hit_by(Vec2::new(130.5, 100.0)));
        assert!(!p.is_hit_by(Vec2::new(100.0, 69.0)));
    }

    #[test]
    fn test_corner_counts_as_hit() {
        // Outside the circle but inside the box
        let p = fruit_at(1, 0.0, 0.0);
        let corner = Vec2::new(28.0, 28.0);
        assert!(corner.length() > p.radius);
        assert!(p.is_hit_by(corner));
    }

    #[test]
    fn test_projectiles_under_returns_all_overlapping() {
        let list = vec![
            fruit_at(1, 100.0, 100.0),
            fruit_at(2, 500.0, 500.0),
            fruit_at(3, 120.0, 110.0),
        ];
        assert_eq!(projectiles_under(&list, Vec2::new(110.0, 105.0)), vec![0, 2]);
        assert!(projectiles_under(&list, Vec2::new(300.0, 300.0)).is_empty());
    }
}
