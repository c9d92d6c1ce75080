use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The first tick measures from clock creation (or the last `reset`).
///
/// By default delta time is clamped to avoid pathological values when the
/// application is paused by the debugger, minimized, or stalls. Simulations
/// that must see the measured elapsed time use [`FrameClock::unclamped`].
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    clamp: Option<(Duration, Duration)>,
}

impl FrameClock {
    /// Creates a new clock with default clamps (100 µs to 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            clamp: Some((dt_min, dt_max)),
        }
    }

    /// Creates a clock that reports the measured delta unmodified.
    pub fn unclamped() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            clamp: None,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let mut dt = now.saturating_duration_since(self.last);

        if let Some((dt_min, dt_max)) = self.clamp {
            dt = dt.clamp(dt_min, dt_max);
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::unclamped();
        let start = clock.last;
        for i in 0..3 {
            let ft = clock.tick_at(start + Duration::from_millis(16 * (i + 1)));
            assert_eq!(ft.frame_index, i);
        }
    }

    #[test]
    fn unclamped_reports_measured_delta() {
        let mut clock = FrameClock::unclamped();
        let start = clock.last;

        let ft = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(ft.dt, 5.0);

        let ft = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(ft.dt, 0.0);
    }

    #[test]
    fn default_clock_clamps_long_stalls() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start + Duration::from_secs(3));
        assert_eq!(ft.dt, 0.25);
    }

    #[test]
    fn default_clock_clamps_zero_delta() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        let ft = clock.tick_at(start);
        assert!((ft.dt - 0.0001).abs() < 1e-9);
    }

    #[test]
    fn time_going_backwards_saturates() {
        let mut clock = FrameClock::unclamped();
        let start = clock.last;
        clock.tick_at(start + Duration::from_millis(10));
        let ft = clock.tick_at(start);
        assert_eq!(ft.dt, 0.0);
    }
}
