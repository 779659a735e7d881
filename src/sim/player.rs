//! The player ship: rotation, thrust physics, firing, buffs, lives
//!
//! The player never touches other entities directly. Shooting returns the
//! shots to insert and the world loop owns every collection; buff expiry is
//! compared against the explicit simulation time passed in by the tick.

use std::collections::HashMap;

use glam::Vec2;

use super::state::{PowerUpKind, Shot};
use crate::consts::*;
use crate::heading_vec;

use super::entity::Body;

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Heading in degrees; 0 points up
    pub rotation: f32,
    /// Signed scalar speed along the heading (px/s)
    pub speed: f32,
    pub lives: u32,
    /// Seconds of remaining post-hit immunity
    pub invulnerability_timer: f32,
    shoot_timer: f32,
    /// Per-kind buff expiry timestamps (sim-time seconds)
    buff_until: HashMap<PowerUpKind, f32>,
    /// Fast-fire stacks share one expiry; each pickup extends it
    fast_fire_level: u32,
    fast_fire_until: f32,
    /// Extra symmetric shot pairs while the spread buff holds
    spread_level: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, PLAYER_RADIUS),
            rotation: 0.0,
            speed: 0.0,
            lives: PLAYER_LIVES,
            invulnerability_timer: 0.0,
            shoot_timer: 0.0,
            buff_until: HashMap::new(),
            fast_fire_level: 0,
            fast_fire_until: 0.0,
            spread_level: 0,
        }
    }

    /// Movement inputs for one tick
    pub fn steer(&mut self, dt: f32, turn: f32, thrust_forward: bool, thrust_back: bool) {
        self.rotation += PLAYER_TURN_SPEED * turn * dt;

        if thrust_forward {
            self.speed = (self.speed + PLAYER_ACCEL * dt).min(PLAYER_SPEED);
        } else if thrust_back {
            self.speed = (self.speed - PLAYER_ACCEL * dt).max(-PLAYER_SPEED * 0.5);
        } else {
            // Idle decay toward rest, faster than thrust builds it
            let decel = PLAYER_ACCEL * 1.5 * dt;
            if self.speed > 0.0 {
                self.speed = (self.speed - decel).max(0.0);
            } else if self.speed < 0.0 {
                self.speed = (self.speed + decel).min(0.0);
            }
        }
    }

    /// Per-tick bookkeeping and motion; `now` is simulation time in seconds
    pub fn update(&mut self, dt: f32, now: f32) {
        // Lazy expiry: spread stacks vanish the frame the buff lapses
        if self.spread_level > 0 && !self.buff_active(PowerUpKind::Spread, now) {
            self.spread_level = 0;
        }

        self.shoot_timer -= dt;
        if self.invulnerability_timer > 0.0 {
            self.invulnerability_timer -= dt;
        }

        self.body.vel = heading_vec(self.rotation) * self.speed;
        self.body.advance(dt);
        self.body.wrap();
    }

    pub fn invulnerable(&self) -> bool {
        self.invulnerability_timer > 0.0
    }

    fn buff_active(&self, kind: PowerUpKind, now: f32) -> bool {
        self.buff_until.get(&kind).is_some_and(|&until| now < until)
    }

    /// Active fast-fire stacks (0 once the shared expiry passes)
    pub fn fast_fire_level(&self, now: f32) -> u32 {
        if now < self.fast_fire_until {
            self.fast_fire_level
        } else {
            0
        }
    }

    pub fn spread_level(&self) -> u32 {
        self.spread_level
    }

    /// Fire if the cooldown allows it. Returns the spawned shots; the
    /// cooldown shrinks by 2^stacks while fast-fire is active.
    pub fn shoot(&mut self, now: f32) -> Option<Vec<Shot>> {
        if self.shoot_timer > 0.0 {
            return None;
        }
        let level = self.fast_fire_level(now);
        let mult = if level > 0 {
            FAST_FIRE_MULT.powi(level as i32)
        } else {
            1.0
        };
        self.shoot_timer = SHOOT_COOLDOWN / mult;

        let mut shots = Vec::with_capacity(1 + 2 * self.spread_level as usize);
        shots.push(Shot::new(self.body.pos, self.rotation));
        for stack in 1..=self.spread_level {
            let offset = SPREAD_ANGLE_DEG * stack as f32;
            for sign in [-1.0f32, 1.0] {
                shots.push(Shot::new(self.body.pos, self.rotation + sign * offset));
            }
        }
        Some(shots)
    }

    /// Nova: a full ring of shots, evenly spaced. Instant effect, no
    /// lingering buff state and no cooldown interaction.
    pub fn nova_shots(&self) -> Vec<Shot> {
        let step = 360.0 / NOVA_SHOT_COUNT as f32;
        (0..NOVA_SHOT_COUNT)
            .map(|i| Shot::new(self.body.pos, i as f32 * step))
            .collect()
    }

    pub fn add_shield(&mut self, duration: f32) {
        self.invulnerability_timer += duration;
    }

    pub fn stack_fast_fire(&mut self, now: f32) {
        self.fast_fire_level += 1;
        // Extend the shared expiry so every stack survives a full duration
        self.fast_fire_until = self.fast_fire_until.max(now) + FAST_FIRE_DURATION;
    }

    pub fn stack_spread(&mut self, now: f32) {
        self.spread_level += 1;
        let until = self.buff_until.entry(PowerUpKind::Spread).or_insert(now);
        *until = until.max(now) + SPREAD_DURATION;
    }

    /// Lethal-collision consequence, minus the area effect (the world loop
    /// applies the blast to its own asteroid collection). No-op while
    /// invulnerable. Returns true if a life was actually lost.
    pub fn take_hit(&mut self) -> bool {
        if self.invulnerable() {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.invulnerability_timer = PLAYER_INVULNERABILITY;
        true
    }
}
