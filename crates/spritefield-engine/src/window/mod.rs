//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer and
//! drives redraws from a fixed-interval timer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
