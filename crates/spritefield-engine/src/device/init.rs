/// Surface choices made when the GPU context is created.
///
/// Device features and limits are wgpu's defaults.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when one exists. When `false` a linear
    /// format is picked and 8-bit sprite colors are written unconverted.
    pub prefer_srgb: bool,

    pub present_mode: wgpu::PresentMode,

    /// Frames the surface may queue ahead (a hint, backends may clamp it).
    pub frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            frame_latency: 2,
        }
    }
}
