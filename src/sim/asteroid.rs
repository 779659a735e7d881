//! Asteroids and the field spawner that feeds them into the arena

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::Body;
use crate::consts::*;
use crate::rotate_deg;

/// A drifting rock. Radius encodes the size tier: MIN, 2xMIN or 3xMIN.
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(pos, vel, radius),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.advance(dt);
        self.body.wrap();
    }

    /// Points by tier; smaller fragments are harder to hit and pay more.
    pub fn points(&self) -> u64 {
        if self.body.radius > ASTEROID_MIN_RADIUS * 2.0 {
            25
        } else if self.body.radius > ASTEROID_MIN_RADIUS {
            50
        } else {
            100
        }
    }

    /// Destroy this asteroid and, unless it is already at the smallest
    /// tier, produce two faster children deflected to either side of the
    /// parent's course.
    pub fn split(&mut self, rng: &mut Pcg32) -> Vec<Asteroid> {
        self.body.alive = false;
        if self.body.radius <= ASTEROID_MIN_RADIUS {
            return Vec::new();
        }

        let child_radius = self.body.radius - ASTEROID_MIN_RADIUS;
        let mut children = Vec::with_capacity(2);
        for sign in [1.0f32, -1.0] {
            let spread =
                rng.random_range(ASTEROID_SPLIT_SPREAD_MIN_DEG..ASTEROID_SPLIT_SPREAD_MAX_DEG);
            let vel = rotate_deg(self.body.vel, sign * spread) * ASTEROID_SPLIT_SPEEDUP;
            children.push(Asteroid::new(self.body.pos, vel, child_radius));
        }
        children
    }
}

/// One arena edge: the inward travel direction plus a position generator
/// parametrized by a fraction along the edge.
struct Edge {
    direction: Vec2,
    position: fn(f32) -> Vec2,
}

const EDGES: [Edge; 4] = [
    Edge {
        direction: Vec2::new(1.0, 0.0),
        position: |t| Vec2::new(-ASTEROID_MAX_RADIUS, t * SCREEN_HEIGHT),
    },
    Edge {
        direction: Vec2::new(-1.0, 0.0),
        position: |t| Vec2::new(SCREEN_WIDTH + ASTEROID_MAX_RADIUS, t * SCREEN_HEIGHT),
    },
    Edge {
        direction: Vec2::new(0.0, 1.0),
        position: |t| Vec2::new(t * SCREEN_WIDTH, -ASTEROID_MAX_RADIUS),
    },
    Edge {
        direction: Vec2::new(0.0, -1.0),
        position: |t| Vec2::new(t * SCREEN_WIDTH, SCREEN_HEIGHT + ASTEROID_MAX_RADIUS),
    },
];

/// Periodic edge spawner. The Threat power-up temporarily multiplies its
/// effective spawn frequency.
#[derive(Debug, Clone)]
pub struct AsteroidField {
    spawn_timer: f32,
    spawn_mult: f32,
    threat_timer: f32,
}

impl Default for AsteroidField {
    fn default() -> Self {
        Self::new()
    }
}

impl AsteroidField {
    pub fn new() -> Self {
        Self {
            spawn_timer: 0.0,
            spawn_mult: 1.0,
            threat_timer: 0.0,
        }
    }

    /// Threat stacks additively: a second pickup extends the remaining
    /// boost instead of resetting it.
    pub fn trigger_threat(&mut self, duration: f32) {
        self.spawn_mult = ASTEROID_SPAWN_BOOST;
        self.threat_timer += duration;
    }

    pub fn threat_active(&self) -> bool {
        self.threat_timer > 0.0
    }

    pub fn spawn_mult(&self) -> f32 {
        self.spawn_mult
    }

    /// Advance the spawn clock; returns a new asteroid when the timer
    /// fires. The timer resets to zero on fire (excess time is discarded,
    /// capping the rate under large dt spikes).
    pub fn update(&mut self, dt: f32, rng: &mut Pcg32) -> Option<Asteroid> {
        self.spawn_timer += dt * self.spawn_mult;
        let spawned = if self.spawn_timer > ASTEROID_SPAWN_RATE {
            self.spawn_timer = 0.0;
            Some(self.spawn(rng))
        } else {
            None
        };

        if self.threat_timer > 0.0 {
            self.threat_timer -= dt;
            if self.threat_timer <= 0.0 {
                self.spawn_mult = 1.0;
            }
        }
        spawned
    }

    fn spawn(&self, rng: &mut Pcg32) -> Asteroid {
        let edge = &EDGES[rng.random_range(0..EDGES.len())];
        let speed = rng.random_range(ASTEROID_SPAWN_SPEED_MIN..=ASTEROID_SPAWN_SPEED_MAX);
        let jitter = rng.random_range(-ASTEROID_SPAWN_JITTER_DEG..=ASTEROID_SPAWN_JITTER_DEG);
        let vel = rotate_deg(edge.direction * speed, jitter);
        let pos = (edge.position)(rng.random_range(0.0..1.0));
        let kind = rng.random_range(1..=ASTEROID_KINDS);
        Asteroid::new(pos, vel, ASTEROID_MIN_RADIUS * kind as f32)
    }
}
