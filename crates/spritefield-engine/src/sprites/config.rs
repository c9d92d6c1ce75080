use std::f32::consts::TAU;
use std::ops::RangeInclusive;

/// Square region sprites wrap within; both axes share `[min, max)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arena {
    pub min: f32,
    pub max: f32,
}

impl Arena {
    #[inline]
    pub fn new(min: f32, max: f32) -> Self {
        debug_assert!(min < max, "Arena::new: empty arena [{min}, {max})");
        Self { min, max }
    }

    /// Arena centered on the origin.
    #[inline]
    pub fn centered(half_extent: f32) -> Self {
        Self::new(-half_extent, half_extent)
    }

    #[inline]
    pub fn half_extent(self) -> f32 {
        (self.max - self.min) * 0.5
    }

    /// Half-open containment: `[min, max)` on both axes.
    #[inline]
    pub fn contains(self, p: [f32; 2]) -> bool {
        p.iter().all(|v| *v >= self.min && *v < self.max)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::centered(400.0)
    }
}

/// Distributions sprites are drawn from at construction.
///
/// Every range is sampled uniformly. Vector ranges apply to each axis
/// independently.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnConfig {
    /// Wrap bounds; positions are drawn from the same range.
    pub arena: Arena,

    /// Linear velocity per axis, units per second.
    pub velocity: RangeInclusive<f32>,

    /// Angular velocity, radians per second.
    pub angular_velocity: RangeInclusive<f32>,

    /// Full width/height per axis, arena units.
    pub size: RangeInclusive<f32>,

    /// Red, green and blue channel range.
    pub color_channel: RangeInclusive<u8>,

    /// Alpha shared by every sprite.
    pub alpha: u8,
}

impl SpawnConfig {
    /// Upper bound of the rotation range. Rotations are drawn from `[0, TAU)`.
    pub const MAX_ROTATION: f32 = TAU;
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            velocity: -30.0..=30.0,
            angular_velocity: -1.0..=1.0,
            size: 20.0..=60.0,
            color_channel: 64..=255,
            alpha: 255,
        }
    }
}
