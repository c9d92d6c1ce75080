/// One acquired swapchain image and the encoder recording into it.
///
/// Handed back to `Gpu::submit`, which presents the image. Until then the
/// next image cannot be acquired.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

/// What the frame loop does after `Gpu::begin_frame` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface reconfigured; the next redraw acquires again.
    Reconfigured,
    /// This frame is not drawn. The sprite store has already advanced.
    SkipFrame,
    /// Out of memory; the runtime exits.
    Fatal,
}
