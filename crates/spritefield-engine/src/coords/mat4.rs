use super::Viewport;

/// Column-major 4×4 matrix, laid out the way WGSL `mat4x4<f32>` expects.
///
/// `cols[c][r]` is the element at row `r`, column `c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Orthographic projection onto wgpu clip space.
    ///
    /// X and Y map `[left, right]` / `[bottom, top]` to `[-1, 1]`; Z maps
    /// `[near, far]` to `[0, 1]` (wgpu depth range, not GL's `[-1, 1]`).
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fn_ = far - near;

        Mat4 {
            cols: [
                [2.0 / rl, 0.0, 0.0, 0.0],
                [0.0, 2.0 / tb, 0.0, 0.0],
                [0.0, 0.0, 1.0 / fn_, 0.0],
                [-(right + left) / rl, -(top + bottom) / tb, -near / fn_, 1.0],
            ],
        }
    }

    /// Projection that keeps a square arena of `half_extent` fully visible
    /// vertically and widens the horizontal range with the viewport aspect.
    pub fn arena_projection(half_extent: f32, viewport: Viewport) -> Self {
        let ar = viewport.aspect();
        Self::orthographic(
            -half_extent * ar,
            half_extent * ar,
            -half_extent,
            half_extent,
            -1.0,
            1.0,
        )
    }

    /// Applies the matrix to a column vector.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (c, col) in self.cols.iter().enumerate() {
            for r in 0..4 {
                out[r] += col[r] * v[c];
            }
        }
        out
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn identity_leaves_vectors_untouched() {
        let v = [3.0, -2.0, 0.5, 1.0];
        assert_eq!(Mat4::IDENTITY.transform(v), v);
    }

    #[test]
    fn square_arena_corners_map_to_ndc_corners() {
        let m = Mat4::arena_projection(400.0, Viewport::new(600.0, 600.0));
        assert!(approx(m.transform([-400.0, -400.0, 0.0, 1.0]), [-1.0, -1.0, 0.5, 1.0]));
        assert!(approx(m.transform([400.0, 400.0, 0.0, 1.0]), [1.0, 1.0, 0.5, 1.0]));
        assert!(approx(m.transform([0.0, 0.0, 0.0, 1.0]), [0.0, 0.0, 0.5, 1.0]));
    }

    #[test]
    fn wide_viewport_extends_horizontal_range() {
        let m = Mat4::arena_projection(400.0, Viewport::new(1200.0, 600.0));
        // Arena edge lands halfway to the screen edge on a 2:1 window.
        assert!(approx(m.transform([400.0, 400.0, 0.0, 1.0]), [0.5, 1.0, 0.5, 1.0]));
        assert!(approx(m.transform([-800.0, 0.0, 0.0, 1.0]), [-1.0, 0.0, 0.5, 1.0]));
    }

    #[test]
    fn depth_range_maps_to_zero_one() {
        let m = Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert!(approx(m.transform([0.0, 0.0, -1.0, 1.0]), [0.0, 0.0, 0.0, 1.0]));
        assert!(approx(m.transform([0.0, 0.0, 1.0, 1.0]), [0.0, 0.0, 1.0, 1.0]));
    }
}
