use std::f32::consts::TAU;

/// Wraps `value` into the half-open range `[min, max)` with a floored modulo.
///
/// Overshoot of any magnitude, in either direction, is folded back in a single
/// call: `wrap(-400.0, 1400.0, 400.0) == -200.0`,
/// `wrap(-400.0, -500.0, 400.0) == 300.0`.
///
/// The exact-multiple case below the range (e.g. `wrap(0.0, -1.0, 1.0)`) lands
/// on `min`, never on `max`.
#[inline]
pub fn wrap(min: f32, value: f32, max: f32) -> f32 {
    debug_assert!(min < max, "wrap: empty range [{min}, {max})");
    let span = max - min;

    // rem_euclid can round up to `span` for tiny negative offsets.
    let offset = (value - min).rem_euclid(span);
    if offset >= span {
        return min;
    }

    let wrapped = min + offset;
    if wrapped >= max { min } else { wrapped }
}

/// Wraps an angle in radians into `[0, 2π)`.
#[inline]
pub fn wrap_angle(radians: f32) -> f32 {
    wrap(0.0, radians, TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Distance between two angles on the circle.
    fn angular_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).abs() % TAU;
        d.min(TAU - d)
    }

    // ── in-range values ───────────────────────────────────────────────────

    #[test]
    fn in_range_value_is_unchanged() {
        assert_eq!(wrap(-400.0, 123.5, 400.0), 123.5);
        assert_eq!(wrap(-400.0, -400.0, 400.0), -400.0);
    }

    #[test]
    fn max_is_excluded() {
        assert_eq!(wrap(-400.0, 400.0, 400.0), -400.0);
    }

    // ── overshoot ─────────────────────────────────────────────────────────

    #[test]
    fn positive_overshoot_wraps_to_start() {
        assert_eq!(wrap(-400.0, 450.0, 400.0), -350.0);
    }

    #[test]
    fn negative_overshoot_wraps_to_end() {
        assert_eq!(wrap(-400.0, -500.0, 400.0), 300.0);
    }

    #[test]
    fn large_positive_overshoot_folds_in_one_step() {
        // 1400 - (-400) = 1800; 1800 mod 800 = 200; -400 + 200 = -200.
        assert_eq!(wrap(-400.0, 1400.0, 400.0), -200.0);
        assert_eq!(wrap(-400.0, 4500.0, 400.0), -300.0);
    }

    #[test]
    fn large_negative_overshoot_folds_in_one_step() {
        // max - fmod(max - value, span) = 400 - fmod(2500, 800) = 400 - 100.
        assert_eq!(wrap(-400.0, -2100.0, 400.0), 300.0);
    }

    #[test]
    fn exact_multiple_below_lands_on_min() {
        assert_eq!(wrap(-400.0, -1200.0, 400.0), -400.0);
        assert_eq!(wrap(0.0, -1.0, 1.0), 0.0);
    }

    #[test]
    fn tiny_negative_offset_stays_below_max() {
        let v = wrap(0.0, -1e-9, 1.0);
        assert!((0.0..1.0).contains(&v), "got {v}");
    }

    // ── idempotence ───────────────────────────────────────────────────────

    #[test]
    fn wrap_is_idempotent() {
        for v in [-5000.0, -400.5, -1.0, 0.0, 399.9, 400.0, 1400.0, 123456.0] {
            let once = wrap(-400.0, v, 400.0);
            assert_eq!(wrap(-400.0, once, 400.0), once, "value {v}");
            assert!((-400.0..400.0).contains(&once), "value {v} wrapped to {once}");
        }
    }

    // ── angles ────────────────────────────────────────────────────────────

    #[test]
    fn three_turns_wrap_to_zero() {
        let a = wrap(0.0, 3.0 * TAU, TAU);
        assert!((0.0..TAU).contains(&a));
        assert!(angular_distance(a, 0.0) < 1e-5, "got {a}");
    }

    #[test]
    fn negative_angle_wraps_forward() {
        let a = wrap_angle(-0.5);
        assert!((a - (TAU - 0.5)).abs() < 1e-6);
    }
}
