//! Color model shared between the sprite store and renderers.
//!
//! - `Color`: linear premultiplied `f32` RGBA, used for clear colors
//! - `Rgba8`: straight 8-bit RGBA, the per-vertex sprite color

pub mod color;

pub use color::{Color, Rgba8};
