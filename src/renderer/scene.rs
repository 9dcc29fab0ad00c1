//! Frame assembly: game state to a triangle list

use glam::Vec2;

use super::shapes::circle;
use super::sprites::{SpriteId, SpriteSheet};
use super::vertex::Vertex;
use crate::consts::{HEIGHT, WIDTH};
use crate::settings::Settings;
use crate::sim::GameState;

/// Build the vertices for one frame, back to front: wall, projectiles, particles
pub fn build_frame(state: &GameState, sprites: &SpriteSheet, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let segments = settings.quality.circle_segments();

    sprites
        .get(SpriteId::Wall)
        .draw_at(Vec2::new(WIDTH / 2.0, HEIGHT / 2.0), &mut vertices);

    for projectile in state.projectiles.iter().filter(|p| !p.sliced) {
        sprites
            .get(SpriteId::for_kind(projectile.kind))
            .draw_at(projectile.pos, &mut vertices);
    }

    let max_particles = settings.max_particles();
    for particle in state
        .particles
        .iter()
        .filter(|p| !p.is_expired())
        .take(max_particles)
    {
        vertices.extend(circle(
            particle.pos,
            particle.radius,
            particle.color.to_rgba(1.0),
            (segments / 2).max(6),
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::QualityPreset;
    use crate::sim::{ProjectileKind, TickInput, slice_at, tick};

    #[test]
    fn test_empty_field_is_just_the_wall() {
        let sprites = SpriteSheet::load(8);
        let state = GameState::new(1);
        let frame = build_frame(&state, &sprites, &Settings::default());
        assert_eq!(frame.len(), sprites.get(SpriteId::Wall).vertices().len());
    }

    #[test]
    fn test_particle_cap_respected() {
        let sprites = SpriteSheet::load(8);
        let mut state = GameState::new(1);
        state.launch(ProjectileKind::Bomb, Vec2::new(300.0, 300.0), 0.0, 0.0);
        slice_at(&mut state, Vec2::new(300.0, 300.0));
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.particles.len(), 20);

        let wall = sprites.get(SpriteId::Wall).vertices().len();
        let mut settings = Settings::from_preset(QualityPreset::Low);
        settings.particles = false;
        assert_eq!(build_frame(&state, &sprites, &settings).len(), wall);

        settings.particles = true;
        let per_particle = (QualityPreset::Low.circle_segments() / 2).max(6) as usize * 3;
        assert_eq!(
            build_frame(&state, &sprites, &settings).len(),
            wall + 20 * per_particle
        );
    }

    #[test]
    fn test_projectile_drawn_with_its_sprite() {
        let sprites = SpriteSheet::load(8);
        let mut state = GameState::new(1);
        state.launch(ProjectileKind::Bomb, Vec2::new(400.0, 300.0), 0.0, 0.0);
        let frame = build_frame(&state, &sprites, &Settings::default());
        let wall = sprites.get(SpriteId::Wall).vertices().len();
        let bomb = sprites.get(SpriteId::Bomb).vertices().len();
        assert_eq!(frame.len(), wall + bomb);
    }
}
