//! Asterfield - a wrap-around asteroids arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Renderer collaborator seam (core is pixel-format agnostic)
//! - `audio`: Sound-effect collaborator seam
//! - `settings`: User preferences with JSON persistence

pub mod audio;
pub mod render;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, NullAudio, SoundEffect};
pub use render::{Hud, NullRenderer, Renderer};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the frame cap)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Arena dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;

    /// Asteroids
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    /// Size tiers (small / medium / large)
    pub const ASTEROID_KINDS: u32 = 3;
    pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;
    /// Seconds between field spawns at spawn_mult = 1.0
    pub const ASTEROID_SPAWN_RATE: f32 = 1.5;
    /// Initial speed range for field spawns (px/s)
    pub const ASTEROID_SPAWN_SPEED_MIN: f32 = 40.0;
    pub const ASTEROID_SPAWN_SPEED_MAX: f32 = 100.0;
    /// Direction jitter from the edge's inward vector (degrees)
    pub const ASTEROID_SPAWN_JITTER_DEG: f32 = 30.0;
    /// Split velocity deflection range (degrees) and speed gain
    pub const ASTEROID_SPLIT_SPREAD_MIN_DEG: f32 = 20.0;
    pub const ASTEROID_SPLIT_SPREAD_MAX_DEG: f32 = 50.0;
    pub const ASTEROID_SPLIT_SPEEDUP: f32 = 1.2;
    /// Spawn frequency multiplier while Threat is active
    pub const ASTEROID_SPAWN_BOOST: f32 = 2.0;

    /// Player ship
    pub const PLAYER_RADIUS: f32 = 45.0;
    /// Degrees per second
    pub const PLAYER_TURN_SPEED: f32 = 300.0;
    /// Full-thrust linear speed (px/s)
    pub const PLAYER_SPEED: f32 = 400.0;
    /// 0 -> max speed in ~0.5 s
    pub const PLAYER_ACCEL: f32 = PLAYER_SPEED * 2.0;
    pub const PLAYER_LIVES: u32 = 3;
    /// Post-hit grace period (seconds)
    pub const PLAYER_INVULNERABILITY: f32 = 2.0;
    /// Asteroids within this multiple of the player radius are destroyed
    /// outright when the player takes a hit
    pub const PLAYER_BLAST_FACTOR: f32 = 3.0;

    /// Shots
    pub const SHOT_RADIUS: f32 = 5.0;
    pub const SHOT_SPEED: f32 = 500.0;
    pub const SHOOT_COOLDOWN: f32 = 0.3;

    /// UFO
    pub const UFO_RADIUS: f32 = 30.0;
    pub const UFO_SPEED: f32 = 150.0;
    pub const UFO_MIN_SPAWN_TIME: f32 = 10.0;
    pub const UFO_MAX_SPAWN_TIME: f32 = 30.0;
    pub const UFO_POINTS: u64 = 200;
    /// Vertical drift: amplitude in px/s, frequency in rad/s of sim time
    pub const UFO_DRIFT_AMPLITUDE: f32 = 18.0;
    pub const UFO_DRIFT_FREQUENCY: f32 = 2.0;
    /// Vertical margin kept clear when picking a spawn height
    pub const UFO_SPAWN_MARGIN: f32 = 50.0;

    /// Power-ups
    pub const POWERUP_RADIUS: f32 = 20.0;
    pub const POWERUP_SPAWN_INTERVAL: f32 = 5.0;
    /// Velocity magnitude range for interval spawns (px/s)
    pub const POWERUP_SPEED_MIN: f32 = 50.0;
    pub const POWERUP_SPEED_MAX: f32 = 120.0;
    /// Velocity magnitude range for UFO drops (px/s)
    pub const POWERUP_DROP_SPEED_MIN: f32 = 80.0;
    pub const POWERUP_DROP_SPEED_MAX: f32 = 120.0;
    /// Chance a destroyed UFO drops a power-up
    pub const POWERUP_DROP_CHANCE: f64 = 0.5;

    /// Buff durations (seconds)
    pub const SHIELD_DURATION: f32 = 10.0;
    pub const FAST_FIRE_DURATION: f32 = 15.0;
    pub const SPREAD_DURATION: f32 = 30.0;
    pub const THREAT_DURATION: f32 = 10.0;

    /// Cooldown divisor per fast-fire stack (2^stacks total)
    pub const FAST_FIRE_MULT: f32 = 2.0;
    /// Lateral offset per spread stack (degrees)
    pub const SPREAD_ANGLE_DEG: f32 = 30.0;
    /// Shots in a nova ring
    pub const NOVA_SHOT_COUNT: u32 = 100;

    /// Explosion effect lifetime (seconds, 12 frames at 0.1 s each)
    pub const EXPLOSION_DURATION: f32 = 1.2;
}

/// Rotate a vector by an angle in degrees
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Unit heading vector for a rotation in degrees; 0 degrees points up
/// (negative Y), increasing clockwise on screen
#[inline]
pub fn heading_vec(rotation_deg: f32) -> Vec2 {
    rotate_deg(Vec2::new(0.0, -1.0), rotation_deg)
}
