/// Which corner of a sprite quad a vertex record represents.
///
/// The discriminant is the value stored in `SpriteVertex::corner` and indexes
/// the offset / texture-coordinate tables in `sprite.wgsl`. Order follows the
/// quad winding: bottom-left, bottom-right, top-right, top-left.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomLeft = 0,
    BottomRight = 1,
    TopRight = 2,
    TopLeft = 3,
}

impl Corner {
    /// All corners in vertex order.
    pub const ALL: [Corner; 4] = [
        Corner::BottomLeft,
        Corner::BottomRight,
        Corner::TopRight,
        Corner::TopLeft,
    ];

    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    #[inline]
    pub const fn from_index(index: u32) -> Option<Corner> {
        match index {
            0 => Some(Corner::BottomLeft),
            1 => Some(Corner::BottomRight),
            2 => Some(Corner::TopRight),
            3 => Some(Corner::TopLeft),
            _ => None,
        }
    }

    /// Unit offset from the sprite center, before scaling by half the size.
    #[inline]
    pub const fn offset(self) -> [f32; 2] {
        match self {
            Corner::BottomLeft => [-1.0, -1.0],
            Corner::BottomRight => [1.0, -1.0],
            Corner::TopRight => [1.0, 1.0],
            Corner::TopLeft => [-1.0, 1.0],
        }
    }

    /// Texture coordinate sampled at this corner.
    #[inline]
    pub const fn tex_coord(self) -> [f32; 2] {
        match self {
            Corner::BottomLeft => [0.0, 0.0],
            Corner::BottomRight => [1.0, 0.0],
            Corner::TopRight => [1.0, 1.0],
            Corner::TopLeft => [0.0, 1.0],
        }
    }

    /// Scalar tag used by older sprite buffers: 5, 15, 25 or 35.
    #[inline]
    pub const fn legacy_tag(self) -> f32 {
        match self {
            Corner::BottomLeft => 5.0,
            Corner::BottomRight => 15.0,
            Corner::TopRight => 25.0,
            Corner::TopLeft => 35.0,
        }
    }

    /// Decodes a legacy scalar tag with the same threshold ladder the old
    /// shaders used (`< 10`, `< 20`, `< 30`, `< 40`).
    pub fn from_legacy_tag(tag: f32) -> Option<Corner> {
        if tag < 10.0 {
            Some(Corner::BottomLeft)
        } else if tag < 20.0 {
            Some(Corner::BottomRight)
        } else if tag < 30.0 {
            Some(Corner::TopRight)
        } else if tag < 40.0 {
            Some(Corner::TopLeft)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_vertex_order() {
        for (i, corner) in Corner::ALL.into_iter().enumerate() {
            assert_eq!(corner.index(), i as u32);
            assert_eq!(Corner::from_index(i as u32), Some(corner));
        }
        assert_eq!(Corner::from_index(4), None);
    }

    #[test]
    fn tex_coord_follows_offset() {
        // Texture space is the offset remapped from [-1, 1] to [0, 1].
        for corner in Corner::ALL {
            let [ox, oy] = corner.offset();
            assert_eq!(corner.tex_coord(), [(ox + 1.0) * 0.5, (oy + 1.0) * 0.5]);
        }
    }

    #[test]
    fn legacy_tags_decode_to_same_corner() {
        for corner in Corner::ALL {
            assert_eq!(Corner::from_legacy_tag(corner.legacy_tag()), Some(corner));
        }
    }

    #[test]
    fn legacy_ladder_thresholds() {
        assert_eq!(Corner::from_legacy_tag(-3.0), Some(Corner::BottomLeft));
        assert_eq!(Corner::from_legacy_tag(10.0), Some(Corner::BottomRight));
        assert_eq!(Corner::from_legacy_tag(29.9), Some(Corner::TopRight));
        assert_eq!(Corner::from_legacy_tag(39.9), Some(Corner::TopLeft));
        assert_eq!(Corner::from_legacy_tag(40.0), None);
    }
}
