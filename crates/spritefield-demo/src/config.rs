use std::time::Duration;

use spritefield_engine::device::GpuInit;
use spritefield_engine::paint::Color;
use spritefield_engine::sprites::SpawnConfig;
use spritefield_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Everything the demo needs to start, fixed at compile time.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub sprite_count: usize,
    pub texture_size: u32,
    pub clear: Color,
    pub spawn: SpawnConfig,
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sprite_count: 100,
            texture_size: 32,
            clear: Color::black(),
            spawn: SpawnConfig::default(),
            runtime: RuntimeConfig {
                title: "GLSL Sprites".to_string(),
                initial_size: LogicalSize::new(600.0, 600.0),
                frame_interval: Duration::from_millis(16),
                // Sprites integrate over the real elapsed time.
                clamp_dt: false,
            },
            gpu: GpuInit {
                // 8-bit sprite colors go to the screen as-is.
                prefer_srgb: false,
                ..GpuInit::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_setup() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.sprite_count, 100);
        assert_eq!(cfg.texture_size, 32);
        assert_eq!(cfg.spawn.arena.half_extent(), 400.0);
        assert!(!cfg.runtime.clamp_dt);
        assert!(!cfg.gpu.prefer_srgb);
    }
}
