//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Same vertex moved by (dx, dy)
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.position[0] + dx, self.position[1] + dy, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for sprites and background
pub mod colors {
    pub const WALL_BRICK: [f32; 4] = [0.55, 0.27, 0.18, 1.0];
    pub const WALL_MORTAR: [f32; 4] = [0.78, 0.72, 0.62, 1.0];
    pub const APPLE_SKIN: [f32; 4] = [0.85, 0.1, 0.12, 1.0];
    pub const APPLE_SHINE: [f32; 4] = [1.0, 0.55, 0.55, 0.8];
    pub const STEM: [f32; 4] = [0.35, 0.22, 0.1, 1.0];
    pub const LEAF: [f32; 4] = [0.2, 0.65, 0.2, 1.0];
    pub const MELON_RIND: [f32; 4] = [0.1, 0.45, 0.15, 1.0];
    pub const MELON_STRIPE: [f32; 4] = [0.2, 0.65, 0.25, 1.0];
    pub const LEMON_SKIN: [f32; 4] = [1.0, 0.9, 0.15, 1.0];
    pub const LEMON_TIP: [f32; 4] = [0.85, 0.75, 0.1, 1.0];
    pub const EGGPLANT_SKIN: [f32; 4] = [0.35, 0.1, 0.45, 1.0];
    pub const EGGPLANT_CAP: [f32; 4] = [0.25, 0.5, 0.2, 1.0];
    pub const BOMB_BODY: [f32; 4] = [0.08, 0.08, 0.1, 1.0];
    pub const BOMB_SHINE: [f32; 4] = [0.4, 0.4, 0.45, 0.9];
    pub const FUSE: [f32; 4] = [0.6, 0.5, 0.35, 1.0];
    pub const SPARK: [f32; 4] = [1.0, 0.75, 0.1, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
