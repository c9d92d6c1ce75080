//! GPU device + surface management.
//!
//! `Gpu` owns the wgpu instance, device, queue and the window surface. Each
//! redraw acquires a `GpuFrame` from it and hands the frame back to present.

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::{GpuFrame, SurfaceErrorAction};
pub use gpu::Gpu;
pub use init::GpuInit;
