//! Game state and the entity types owned by the world loop
//!
//! The `GameState` is the sole owner of every entity collection; spawners
//! hand it new entities and the tick is the only place collision
//! consequences are applied.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::asteroid::{Asteroid, AsteroidField};
use super::entity::Body;
use super::player::Player;
use crate::consts::*;
use crate::heading_vec;

/// Current mode of the top-level game state machine. The sim only advances
/// in `Playing`; the other modes are inert screens waiting for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the start input
    Start,
    /// Active gameplay
    Playing,
    /// Frozen; no timer advances
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

/// Discrete triggers for the audio collaborator, drained by the caller
/// each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Fired,
    Explosion,
    PowerUpCollected,
    UfoDestroyed,
    GameOver { score: u64 },
}

/// A projectile. Keeps its heading for rendering; despawns on any edge
/// instead of wrapping.
#[derive(Debug, Clone)]
pub struct Shot {
    pub body: Body,
    /// Heading in degrees, rendering only
    pub rotation: f32,
}

impl Shot {
    pub fn new(pos: Vec2, rotation: f32) -> Self {
        Self {
            body: Body::new(pos, heading_vec(rotation) * SHOT_SPEED, SHOT_RADIUS),
            rotation,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.advance(dt);
        if self.body.offscreen() {
            self.body.alive = false;
        }
    }
}

/// Crosses the arena horizontally with a sinusoidal vertical drift;
/// despawns past the far side.
#[derive(Debug, Clone)]
pub struct Ufo {
    pub body: Body,
}

impl Ufo {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            body: Body::new(pos, vel, UFO_RADIUS),
        }
    }

    /// `now` is simulation time, which drives the drift phase
    pub fn update(&mut self, dt: f32, now: f32) {
        self.body.advance(dt);
        self.body.pos.y += (now * UFO_DRIFT_FREQUENCY).sin() * UFO_DRIFT_AMPLITUDE * dt;
        if self.body.offscreen_x() {
            self.body.alive = false;
        }
    }

    pub fn points(&self) -> u64 {
        UFO_POINTS
    }
}

/// Power-up kinds, ordered by rarity weight (descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    Spread,
    Shield,
    FastFire,
    Nova,
    Threat,
}

/// Rarity table; weights sum to 1.0
pub const POWERUP_RARITY: [(PowerUpKind, f64); 5] = [
    (PowerUpKind::Spread, 0.30),
    (PowerUpKind::Shield, 0.25),
    (PowerUpKind::FastFire, 0.20),
    (PowerUpKind::Nova, 0.15),
    (PowerUpKind::Threat, 0.10),
];

impl PowerUpKind {
    /// Weighted random draw over the rarity table. Falls back to the last
    /// entry if floating rounding leaves the cumulative sum short.
    pub fn weighted_draw(rng: &mut Pcg32) -> Self {
        let roll: f64 = rng.random();
        let mut cumulative = 0.0;
        for &(kind, weight) in &POWERUP_RARITY {
            cumulative += weight;
            if roll < cumulative {
                return kind;
            }
        }
        POWERUP_RARITY[POWERUP_RARITY.len() - 1].0
    }

    /// Buff duration in seconds; zero means instant effect
    pub fn duration(&self) -> f32 {
        match self {
            PowerUpKind::Shield => SHIELD_DURATION,
            PowerUpKind::FastFire => FAST_FIRE_DURATION,
            PowerUpKind::Spread => SPREAD_DURATION,
            PowerUpKind::Threat => THREAT_DURATION,
            PowerUpKind::Nova => 0.0,
        }
    }
}

/// A collectible drifting through the arena with asteroid-style wrap.
/// Duration semantics live in the consumer, not here.
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub body: Body,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(pos: Vec2, vel: Vec2, kind: PowerUpKind) -> Self {
        Self {
            body: Body::new(pos, vel, POWERUP_RADIUS),
            kind,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.advance(dt);
        self.body.wrap();
    }
}

/// Visual-only explosion marker; rendering decides what it looks like
#[derive(Debug, Clone, Copy)]
pub struct Explosion {
    pub pos: Vec2,
    pub age: f32,
}

impl Explosion {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, age: 0.0 }
    }
}

/// Complete game state. Owns the RNG so every run is reproducible from
/// its seed.
pub struct GameState {
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation time in seconds; advances only while Playing
    pub time_secs: f32,
    score: u64,
    pub player: Player,
    pub field: AsteroidField,
    pub asteroids: Vec<Asteroid>,
    pub shots: Vec<Shot>,
    pub ufos: Vec<Ufo>,
    pub powerups: Vec<PowerUp>,
    pub explosions: Vec<Explosion>,
    /// Audio/UI triggers accumulated this tick
    pub events: Vec<GameEvent>,
    /// Seconds until the next UFO appears
    pub ufo_spawn_timer: f32,
    /// Seconds until the next interval power-up
    pub powerup_spawn_timer: f32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ufo_spawn_timer = rng.random_range(UFO_MIN_SPAWN_TIME..=UFO_MAX_SPAWN_TIME);
        Self {
            seed,
            rng,
            phase: GamePhase::Start,
            time_secs: 0.0,
            score: 0,
            player: Player::new(Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)),
            field: AsteroidField::new(),
            asteroids: Vec::new(),
            shots: Vec::new(),
            ufos: Vec::new(),
            powerups: Vec::new(),
            explosions: Vec::new(),
            events: Vec::new(),
            ufo_spawn_timer,
            powerup_spawn_timer: POWERUP_SPAWN_INTERVAL,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Score only ever grows during a run
    pub fn add_score(&mut self, points: u64) {
        self.score += points;
    }

    /// Hard reset after game over: fresh player, empty collections, zero
    /// score. The RNG stream continues so the run stays deterministic.
    pub fn reset(&mut self) {
        log::info!("Resetting game state (final score {})", self.score);
        self.player = Player::new(Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0));
        self.field = AsteroidField::new();
        self.asteroids.clear();
        self.shots.clear();
        self.ufos.clear();
        self.powerups.clear();
        self.explosions.clear();
        self.events.clear();
        self.score = 0;
        self.time_secs = 0.0;
        self.ufo_spawn_timer = self
            .rng
            .random_range(UFO_MIN_SPAWN_TIME..=UFO_MAX_SPAWN_TIME);
        self.powerup_spawn_timer = POWERUP_SPAWN_INTERVAL;
    }

    /// Drain the events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// A point just outside a uniformly chosen arena edge (power-up spawns)
    pub fn random_outside_position(&mut self) -> Vec2 {
        let r = POWERUP_RADIUS;
        match self.rng.random_range(0..4u8) {
            0 => Vec2::new(-r, self.rng.random_range(0.0..SCREEN_HEIGHT)),
            1 => Vec2::new(SCREEN_WIDTH + r, self.rng.random_range(0.0..SCREEN_HEIGHT)),
            2 => Vec2::new(self.rng.random_range(0.0..SCREEN_WIDTH), -r),
            _ => Vec2::new(self.rng.random_range(0.0..SCREEN_WIDTH), SCREEN_HEIGHT + r),
        }
    }

    /// Uniform random direction at a magnitude drawn from [min, max].
    /// Deliberately not biased inward; edge spawns that drift away simply
    /// wrap back around.
    pub fn random_velocity(&mut self, min_speed: f32, max_speed: f32) -> Vec2 {
        let angle = self.rng.random_range(0.0..360.0f32);
        let speed = self.rng.random_range(min_speed..=max_speed);
        crate::rotate_deg(Vec2::new(1.0, 0.0), angle) * speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shot_despawns_past_any_edge() {
        let mut shot = Shot::new(Vec2::new(640.0, 10.0), 0.0);
        // Heading up at 500 px/s; clear of the top edge within a tenth of a second
        shot.update(0.1);
        assert!(!shot.body.alive);
    }

    #[test]
    fn shot_velocity_follows_heading() {
        let shot = Shot::new(Vec2::ZERO, 90.0);
        // 90 degrees clockwise from up
        assert!((shot.body.vel.x - SHOT_SPEED).abs() < 1e-2);
        assert!(shot.body.vel.y.abs() < 1e-2);
    }

    #[test]
    fn ufo_despawns_leaving_horizontally_but_not_vertically() {
        let mut ufo = Ufo::new(
            Vec2::new(SCREEN_WIDTH + UFO_RADIUS - 1.0, 300.0),
            Vec2::new(UFO_SPEED, 0.0),
        );
        ufo.update(0.1, 0.0);
        assert!(!ufo.body.alive);

        let mut ufo = Ufo::new(Vec2::new(300.0, -500.0), Vec2::new(UFO_SPEED, 0.0));
        ufo.update(0.1, 0.0);
        assert!(ufo.body.alive);
    }

    #[test]
    fn powerup_wraps_like_an_asteroid() {
        let mut pu = PowerUp::new(
            Vec2::new(-POWERUP_RADIUS - 1.0, 100.0),
            Vec2::ZERO,
            PowerUpKind::Shield,
        );
        pu.update(0.0);
        assert!(pu.body.alive);
        assert_eq!(pu.body.pos.x, SCREEN_WIDTH + POWERUP_RADIUS);
    }

    #[test]
    fn weighted_draw_matches_rarity_table() {
        let mut rng = Pcg32::seed_from_u64(42);
        const N: u32 = 100_000;
        let mut counts = std::collections::HashMap::new();
        for _ in 0..N {
            *counts
                .entry(PowerUpKind::weighted_draw(&mut rng))
                .or_insert(0u32) += 1;
        }
        for (kind, weight) in POWERUP_RARITY {
            let freq = counts.get(&kind).copied().unwrap_or(0) as f64 / N as f64;
            assert!(
                (freq - weight).abs() < 0.01,
                "{kind:?}: frequency {freq:.4} vs weight {weight}"
            );
        }
    }

    #[test]
    fn score_is_monotonic() {
        let mut state = GameState::new(1);
        let mut last = state.score();
        for points in [25, 50, 100, 200, 25] {
            state.add_score(points);
            assert!(state.score() >= last);
            last = state.score();
        }
        assert_eq!(state.score(), 400);
    }

    #[test]
    fn reset_clears_the_world_but_keeps_the_stream() {
        let mut state = GameState::new(9);
        state.phase = GamePhase::Playing;
        state.add_score(500);
        state
            .asteroids
            .push(Asteroid::new(Vec2::ZERO, Vec2::ZERO, 60.0));
        state.shots.push(Shot::new(Vec2::ZERO, 0.0));
        state.time_secs = 33.0;

        state.reset();
        assert_eq!(state.score(), 0);
        assert!(state.asteroids.is_empty());
        assert!(state.shots.is_empty());
        assert_eq!(state.time_secs, 0.0);
        assert_eq!(state.player.lives, PLAYER_LIVES);
        assert!(state.ufo_spawn_timer >= UFO_MIN_SPAWN_TIME);
        assert!(state.ufo_spawn_timer <= UFO_MAX_SPAWN_TIME);
    }

    #[test]
    fn outside_positions_are_outside_the_arena() {
        let mut state = GameState::new(3);
        for _ in 0..100 {
            let pos = state.random_outside_position();
            let outside_x = pos.x <= -POWERUP_RADIUS || pos.x >= SCREEN_WIDTH + POWERUP_RADIUS;
            let outside_y = pos.y <= -POWERUP_RADIUS || pos.y >= SCREEN_HEIGHT + POWERUP_RADIUS;
            assert!(outside_x || outside_y);
        }
    }

    #[test]
    fn random_velocity_respects_magnitude_range() {
        let mut state = GameState::new(4);
        for _ in 0..100 {
            let v = state.random_velocity(50.0, 120.0);
            let speed = v.length();
            assert!((49.9..=120.1).contains(&speed));
        }
    }
}
