//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, textures) and are
//! built once at application setup.
//!
//! Convention:
//! - CPU geometry is in arena units (origin centered, +Y up).
//! - Vertex shaders map to clip space with projection/modelview uniforms.

mod ctx;
mod shader;
mod sprites;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use shader::{compile_wgsl, ShaderCompileError};
pub use sprites::SpriteRenderer;
pub use texture::{noise_texels, NoiseTexture};
