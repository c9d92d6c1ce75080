/// Viewport size in logical pixels.
///
/// Only the aspect ratio matters to the sprite projection; the absolute size is
/// kept for diagnostics and future pixel-space overlays.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height. Degenerate viewports (minimized windows) report `1.0`.
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() { self.width / self.height } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_wide_viewport() {
        assert_eq!(Viewport::new(1200.0, 600.0).aspect(), 2.0);
    }

    #[test]
    fn aspect_of_zero_height_falls_back_to_square() {
        assert_eq!(Viewport::new(800.0, 0.0).aspect(), 1.0);
        assert_eq!(Viewport::default().aspect(), 1.0);
    }
}
