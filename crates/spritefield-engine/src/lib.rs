//! Sprite-field engine crate.
//!
//! - `sprites`: the sprite store (vertex records, motion, wrapping)
//! - `render`: the wgpu sprite pipeline and its texture
//! - `window`, `device`, `core`, `time`: platform loop, GPU context, app
//!   contract and frame timing
//! - `logging`, `coords`, `paint`: shared utilities

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod render;
pub mod sprites;
