//! Coordinate and geometry types shared across the sprite store and renderers.
//!
//! Canonical sprite space:
//! - Arena units, origin at the arena center
//! - +X right, +Y up
//!
//! Renderers map arena space to clip space with an orthographic projection
//! built from the viewport aspect ratio.

mod mat4;
mod vec2;
mod viewport;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use viewport::Viewport;
