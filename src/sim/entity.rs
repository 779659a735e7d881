//! Shared entity body: position, velocity, collision radius, liveness
//!
//! Every game object composes a `Body` instead of inheriting from a base
//! class. Edge behavior is split into two policies: `wrap` re-enters the
//! opposite side (player, asteroids, power-ups) and `offscreen`/`offscreen_x`
//! feed the despawn path (shots, UFOs).

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alive: bool,
}

impl Body {
    /// A non-positive radius is a contract violation by the spawner; fatal
    /// in debug builds, clamped to a tiny positive collider in release.
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "entity radius must be positive, got {radius}");
        Self {
            pos,
            vel,
            radius: radius.max(f32::EPSILON),
            alive: true,
        }
    }

    /// Linear motion: p = p0 + v * dt
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Re-enter the opposite edge once fully outside, offset by the radius
    /// so the sprite never pops mid-screen.
    pub fn wrap(&mut self) {
        if self.pos.x < -self.radius {
            self.pos.x = SCREEN_WIDTH + self.radius;
        } else if self.pos.x > SCREEN_WIDTH + self.radius {
            self.pos.x = -self.radius;
        }
        if self.pos.y < -self.radius {
            self.pos.y = SCREEN_HEIGHT + self.radius;
        } else if self.pos.y > SCREEN_HEIGHT + self.radius {
            self.pos.y = -self.radius;
        }
    }

    /// Fully outside any arena edge (shot despawn condition)
    #[inline]
    pub fn offscreen(&self) -> bool {
        self.pos.x < -self.radius
            || self.pos.x > SCREEN_WIDTH + self.radius
            || self.pos.y < -self.radius
            || self.pos.y > SCREEN_HEIGHT + self.radius
    }

    /// Fully outside the left or right edge (UFO despawn condition; UFOs
    /// drift vertically but never leave through the top or bottom)
    #[inline]
    pub fn offscreen_x(&self) -> bool {
        self.pos.x < -self.radius || self.pos.x > SCREEN_WIDTH + self.radius
    }

    /// Circle-circle test: centers within the sum of radii
    #[inline]
    pub fn collides_with(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) <= self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn advance_is_linear() {
        let mut b = Body::new(Vec2::new(10.0, 20.0), Vec2::new(100.0, -50.0), 5.0);
        b.advance(0.5);
        assert_eq!(b.pos, Vec2::new(60.0, -5.0));
    }

    #[test]
    fn wrap_repositions_to_opposite_edge() {
        let mut b = Body::new(Vec2::new(-21.0, 100.0), Vec2::ZERO, 20.0);
        b.wrap();
        assert_eq!(b.pos.x, SCREEN_WIDTH + 20.0);

        let mut b = Body::new(Vec2::new(SCREEN_WIDTH + 21.0, 100.0), Vec2::ZERO, 20.0);
        b.wrap();
        assert_eq!(b.pos.x, -20.0);

        let mut b = Body::new(Vec2::new(100.0, -21.0), Vec2::ZERO, 20.0);
        b.wrap();
        assert_eq!(b.pos.y, SCREEN_HEIGHT + 20.0);

        let mut b = Body::new(Vec2::new(100.0, SCREEN_HEIGHT + 21.0), Vec2::ZERO, 20.0);
        b.wrap();
        assert_eq!(b.pos.y, -20.0);
    }

    #[test]
    fn wrap_leaves_onscreen_position_alone() {
        let mut b = Body::new(Vec2::new(640.0, 384.0), Vec2::ZERO, 20.0);
        b.wrap();
        assert_eq!(b.pos, Vec2::new(640.0, 384.0));
    }

    #[test]
    fn offscreen_requires_full_exit() {
        let b = Body::new(Vec2::new(-4.9, 100.0), Vec2::ZERO, 5.0);
        assert!(!b.offscreen());
        let b = Body::new(Vec2::new(-5.1, 100.0), Vec2::ZERO, 5.0);
        assert!(b.offscreen());
    }

    #[test]
    fn offscreen_x_ignores_vertical_exit() {
        let b = Body::new(Vec2::new(100.0, -500.0), Vec2::ZERO, 30.0);
        assert!(!b.offscreen_x());
        let b = Body::new(Vec2::new(SCREEN_WIDTH + 31.0, 100.0), Vec2::ZERO, 30.0);
        assert!(b.offscreen_x());
    }

    #[test]
    fn collision_uses_radius_sum() {
        let a = Body::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 60.0);
        let b = Body::new(Vec2::new(65.0, 0.0), Vec2::ZERO, 5.0);
        assert!(a.collides_with(&b));
        let c = Body::new(Vec2::new(65.1, 0.0), Vec2::ZERO, 5.0);
        assert!(!a.collides_with(&c));
    }

    proptest! {
        /// After one wrap pass, a body that was outside at most one edge per
        /// axis is back inside the enlarged arena bounds.
        #[test]
        fn wrap_stays_within_bounds(
            x in -100.0f32..SCREEN_WIDTH + 100.0,
            y in -100.0f32..SCREEN_HEIGHT + 100.0,
            radius in 1.0f32..60.0,
        ) {
            let mut b = Body::new(Vec2::new(x, y), Vec2::ZERO, radius);
            b.wrap();
            prop_assert!(b.pos.x >= -radius && b.pos.x <= SCREEN_WIDTH + radius);
            prop_assert!(b.pos.y >= -radius && b.pos.y <= SCREEN_HEIGHT + radius);
        }
    }
}
