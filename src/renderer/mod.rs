//! WebGPU rendering module
//!
//! Everything is drawn as flat-colored triangles. Sprites are meshes built
//! once at startup; each frame translates them into place.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod sprites;
pub mod vertex;

pub use pipeline::{RenderState, game_to_ndc};
pub use scene::build_frame;
pub use sprites::{Sprite, SpriteId, SpriteSheet};
pub use vertex::Vertex;
