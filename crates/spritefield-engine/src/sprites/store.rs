use rand::Rng;

use crate::coords::Vec2;
use crate::paint::Rgba8;

use super::vertex::VERTICES_PER_SPRITE;
use super::{wrap, wrap_angle, Arena, Corner, SpawnConfig, SpriteVertex};

/// Visual attributes of one sprite, shared by its four vertex records.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sprite {
    pub position: Vec2,
    /// Full width and height.
    pub size: Vec2,
    /// Radians.
    pub rotation: f32,
    pub color: Rgba8,
}

impl Sprite {
    fn random<R: Rng + ?Sized>(config: &SpawnConfig, rng: &mut R) -> Self {
        let arena = config.arena;
        let position = Vec2::new(
            rng.gen_range(arena.min..arena.max),
            rng.gen_range(arena.min..arena.max),
        );
        let size = Vec2::new(
            rng.gen_range(config.size.clone()),
            rng.gen_range(config.size.clone()),
        );
        let rotation = rng.gen_range(0.0..SpawnConfig::MAX_ROTATION);
        let color = Rgba8::new(
            rng.gen_range(config.color_channel.clone()),
            rng.gen_range(config.color_channel.clone()),
            rng.gen_range(config.color_channel.clone()),
            config.alpha,
        );

        Self { position, size, rotation, color }
    }
}

/// Per-sprite motion. Never uploaded.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SpriteMotion {
    /// Units per second.
    pub velocity: Vec2,
    /// Radians per second.
    pub angular_velocity: f32,
}

impl SpriteMotion {
    fn random<R: Rng + ?Sized>(config: &SpawnConfig, rng: &mut R) -> Self {
        let velocity = Vec2::new(
            rng.gen_range(config.velocity.clone()),
            rng.gen_range(config.velocity.clone()),
        );
        let angular_velocity = rng.gen_range(config.angular_velocity.clone());

        Self { velocity, angular_velocity }
    }
}

/// Fixed-size collection of animated sprites.
///
/// Holds `4 × len()` vertex records and `len()` motion states. The sprite
/// count never changes after construction.
///
/// Invariants (hold after construction and after every `update`):
/// - the four records of a sprite share position, size, rotation and color
/// - records carry corners bottom-left, bottom-right, top-right, top-left
/// - positions lie in `[arena.min, arena.max)`, rotations in `[0, 2π)`
#[derive(Debug, Clone)]
pub struct SpriteStore {
    arena: Arena,
    vertices: Vec<SpriteVertex>,
    motion: Vec<SpriteMotion>,
}

impl SpriteStore {
    /// Creates `count` sprites from the default distributions, seeded from
    /// the thread-local RNG.
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, &SpawnConfig::default(), &mut rand::thread_rng())
    }

    /// Creates `count` sprites drawn from `config` using `rng`.
    pub fn with_rng<R: Rng + ?Sized>(count: usize, config: &SpawnConfig, rng: &mut R) -> Self {
        let sprites = (0..count).map(|_| {
            let motion = SpriteMotion::random(config, rng);
            let sprite = Sprite::random(config, rng);
            (sprite, motion)
        });

        Self::from_sprites(config.arena, sprites)
    }

    /// Builds a store from explicit sprites.
    ///
    /// Positions and rotations are wrapped into the arena so the store
    /// invariants hold from the start.
    pub fn from_sprites<I>(arena: Arena, sprites: I) -> Self
    where
        I: IntoIterator<Item = (Sprite, SpriteMotion)>,
    {
        let sprites = sprites.into_iter();
        let (lower, _) = sprites.size_hint();

        let mut vertices = Vec::with_capacity(lower * VERTICES_PER_SPRITE);
        let mut motion = Vec::with_capacity(lower);

        for (mut sprite, m) in sprites {
            sprite.position = Vec2::new(
                wrap(arena.min, sprite.position.x, arena.max),
                wrap(arena.min, sprite.position.y, arena.max),
            );
            sprite.rotation = wrap_angle(sprite.rotation);

            vertices.extend(Corner::ALL.map(|corner| SpriteVertex::new(&sprite, corner)));
            motion.push(m);
        }

        Self { arena, vertices, motion }
    }

    /// Advances every sprite by `dt` seconds.
    ///
    /// Integrates position and rotation on the sprite's first record, wraps
    /// them back into range, then mirrors them onto the other three records.
    /// Size and color are left untouched.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() {
            log::warn!("SpriteStore::update: ignoring non-finite dt {dt}");
            return;
        }

        let Arena { min, max } = self.arena;

        for (quad, motion) in self
            .vertices
            .chunks_exact_mut(VERTICES_PER_SPRITE)
            .zip(&self.motion)
        {
            let [lead, rest @ ..] = quad else { continue };

            let position = Vec2::from(lead.position) + motion.velocity * dt;
            lead.position = [wrap(min, position.x, max), wrap(min, position.y, max)];
            lead.rotation = wrap_angle(lead.rotation + motion.angular_velocity * dt);

            for v in rest {
                v.position = lead.position;
                v.rotation = lead.rotation;
            }
        }
    }

    /// Vertex records in upload order, four per sprite.
    #[inline]
    pub fn vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    #[inline]
    pub fn motion(&self) -> &[SpriteMotion] {
        &self.motion
    }

    /// Mutable motion states, one per sprite. Changes apply from the next
    /// `update`.
    #[inline]
    pub fn motion_mut(&mut self) -> &mut [SpriteMotion] {
        &mut self.motion
    }

    /// The four records of sprite `index`.
    #[inline]
    pub fn sprite(&self, index: usize) -> Option<&[SpriteVertex]> {
        let start = index.checked_mul(VERTICES_PER_SPRITE)?;
        self.vertices.get(start..start + VERTICES_PER_SPRITE)
    }

    /// Iterates sprites as four-record slices.
    #[inline]
    pub fn sprites(&self) -> impl Iterator<Item = &[SpriteVertex]> + '_ {
        self.vertices.chunks_exact(VERTICES_PER_SPRITE)
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Sprite count.
    #[inline]
    pub fn len(&self) -> usize {
        self.motion.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.motion.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn seeded(count: usize, seed: u64) -> SpriteStore {
        let mut rng = StdRng::seed_from_u64(seed);
        SpriteStore::with_rng(count, &SpawnConfig::default(), &mut rng)
    }

    fn assert_quads_consistent(store: &SpriteStore) {
        for (i, quad) in store.sprites().enumerate() {
            let lead = quad[0];
            for (v, corner) in quad.iter().zip(Corner::ALL) {
                assert_eq!(v.position, lead.position, "sprite {i} position");
                assert_eq!(v.size, lead.size, "sprite {i} size");
                assert_eq!(v.rotation, lead.rotation, "sprite {i} rotation");
                assert_eq!(v.color, lead.color, "sprite {i} color");
                assert_eq!(v.corner(), Some(corner), "sprite {i} corner");
            }
        }
    }

    fn assert_in_range(store: &SpriteStore) {
        let arena = store.arena();
        for v in store.vertices() {
            assert!(arena.contains(v.position), "position {:?} escaped", v.position);
            assert!((0.0..TAU).contains(&v.rotation), "rotation {} escaped", v.rotation);
        }
    }

    fn still_sprite(position: Vec2, velocity: Vec2) -> (Sprite, SpriteMotion) {
        (
            Sprite {
                position,
                size: Vec2::new(20.0, 40.0),
                rotation: 0.0,
                color: Rgba8::opaque(64, 128, 255),
            },
            SpriteMotion { velocity, angular_velocity: 0.0 },
        )
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn construction_allocates_four_records_per_sprite() {
        let store = seeded(100, 1);
        assert_eq!(store.len(), 100);
        assert_eq!(store.vertices().len(), 400);
        assert_eq!(store.motion().len(), 100);
        assert_eq!(store.sprites().count(), 100);
    }

    #[test]
    fn construction_shares_attributes_across_corners() {
        let store = seeded(50, 2);
        assert_quads_consistent(&store);
    }

    #[test]
    fn construction_draws_from_configured_ranges() {
        let config = SpawnConfig::default();
        let store = seeded(200, 3);

        assert_in_range(&store);
        for v in store.vertices() {
            assert!(v.size.iter().all(|s| config.size.contains(s)), "size {:?}", v.size);
            assert!(v.color[..3].iter().all(|c| config.color_channel.contains(c)));
            assert_eq!(v.color[3], config.alpha);
        }
        for m in store.motion() {
            assert!(config.velocity.contains(&m.velocity.x));
            assert!(config.velocity.contains(&m.velocity.y));
            assert!(config.angular_velocity.contains(&m.angular_velocity));
        }
    }

    #[test]
    fn same_seed_builds_same_store() {
        let a = seeded(20, 42);
        let b = seeded(20, 42);
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.motion(), b.motion());
    }

    #[test]
    fn empty_store() {
        let mut store = seeded(0, 0);
        store.update(1.0);
        assert!(store.is_empty());
        assert!(store.vertices().is_empty());
        assert!(store.sprite(0).is_none());
    }

    #[test]
    fn from_sprites_wraps_out_of_range_input() {
        let (mut sprite, motion) = still_sprite(Vec2::new(500.0, -1400.0), Vec2::zero());
        sprite.rotation = -0.25;
        let store = SpriteStore::from_sprites(Arena::default(), [(sprite, motion)]);

        let quad = store.sprite(0).unwrap();
        assert_eq!(quad[0].position, [-300.0, 200.0]);
        assert!((quad[0].rotation - (TAU - 0.25)).abs() < 1e-6);
        assert_quads_consistent(&store);
    }

    #[test]
    fn sprite_out_of_bounds_is_none() {
        let store = seeded(3, 5);
        assert!(store.sprite(2).is_some());
        assert!(store.sprite(3).is_none());
        assert!(store.sprite(usize::MAX).is_none());
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_keeps_everything_in_range() {
        for dt in [0.0, 0.016, 1.0, 37.5, 1000.0] {
            let mut store = seeded(100, 7);
            store.update(dt);
            assert_in_range(&store);
        }
    }

    #[test]
    fn corners_mirror_lead_after_many_updates() {
        let mut store = seeded(64, 11);
        for step in 0..500 {
            store.update(0.016 + (step % 7) as f32 * 0.3);
        }
        assert_quads_consistent(&store);
        assert_in_range(&store);
    }

    #[test]
    fn update_never_touches_size_or_color() {
        let mut store = seeded(30, 13);
        let before: Vec<_> = store.vertices().iter().map(|v| (v.size, v.color)).collect();
        for _ in 0..100 {
            store.update(0.5);
        }
        let after: Vec<_> = store.vertices().iter().map(|v| (v.size, v.color)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn zero_dt_keeps_positions() {
        let mut store = seeded(10, 17);
        let before = store.vertices().to_vec();
        store.update(0.0);
        for (a, b) in store.vertices().iter().zip(&before) {
            assert!((a.position[0] - b.position[0]).abs() < 1e-3);
            assert!((a.position[1] - b.position[1]).abs() < 1e-3);
            assert_eq!(a.rotation, b.rotation);
        }
    }

    #[test]
    fn non_finite_dt_is_ignored() {
        let mut store = seeded(10, 19);
        let before = store.vertices().to_vec();
        store.update(f32::NAN);
        store.update(f32::INFINITY);
        assert_eq!(store.vertices(), &before[..]);
    }

    #[test]
    fn rotation_integrates_and_wraps() {
        let (sprite, mut motion) = still_sprite(Vec2::zero(), Vec2::zero());
        motion.angular_velocity = 1.0;
        let mut store = SpriteStore::from_sprites(Arena::default(), [(sprite, motion)]);

        store.update(TAU + 0.5);
        let rotation = store.sprite(0).unwrap()[3].rotation;
        assert!((rotation - 0.5).abs() < 1e-5, "got {rotation}");
    }

    #[test]
    fn negative_velocity_wraps_to_far_edge() {
        let sprite = still_sprite(Vec2::new(-390.0, 0.0), Vec2::new(-20.0, 0.0));
        let mut store = SpriteStore::from_sprites(Arena::default(), [sprite]);

        store.update(1.0);
        assert_eq!(store.sprite(0).unwrap()[2].position, [390.0, 0.0]);
    }

    #[test]
    fn constant_velocity_scenario_matches_single_wrap() {
        let x0 = 37.5;
        let sprite = still_sprite(Vec2::new(x0, -12.0), Vec2::zero());
        let mut store = SpriteStore::from_sprites(Arena::default(), [sprite]);
        store.motion_mut()[0].velocity = Vec2::new(100.0, 0.0);

        for _ in 0..9 {
            store.update(5.0);
        }

        let quad = store.sprite(0).unwrap();
        assert_eq!(quad[0].position[0], wrap(-400.0, x0 + 4500.0, 400.0));
        assert_eq!(quad[0].position[0], -262.5);
        assert_eq!(quad[0].position[1], -12.0);
        assert_quads_consistent(&store);
    }
}
