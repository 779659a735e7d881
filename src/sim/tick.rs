//! Fixed timestep simulation tick
//!
//! One tick runs, in strict order: phase transitions, timed spawns, entity
//! updates, collision resolution, cleanup. Collisions are checked against a
//! fixed priority so a single frame can neither double-penalize the player
//! nor double-award a destroyed object, and dead entities are only removed
//! after every check has run.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState, PowerUp, PowerUpKind, Shot, Ufo};
use crate::consts::*;
use rand::Rng;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust_forward: bool,
    pub thrust_back: bool,
    pub fire: bool,
    /// Start input on the title screen (space/enter)
    pub start: bool,
    /// Pause toggle (escape)
    pub pause: bool,
    /// Restart request on the game-over screen
    pub restart: bool,
    /// Demo mode: the sim steers itself
    pub idle_mode: bool,
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Start => {
            if input.start {
                log::info!("Starting run with seed {}", state.seed);
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::Paused => {
            // Paused screens own the clock; nothing leaks into physics
            if input.pause {
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset();
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return;
            }
        }
    }

    state.time_secs += dt;
    let now = state.time_secs;

    let input = if input.idle_mode {
        autopilot(state, *input)
    } else {
        *input
    };

    // --- Timed spawns ---
    spawn_phase(state, dt);

    // --- Update phase ---
    let turn = (input.turn_right as i32 - input.turn_left as i32) as f32;
    state
        .player
        .steer(dt, turn, input.thrust_forward, input.thrust_back);
    state.player.update(dt, now);

    if input.fire
        && let Some(shots) = state.player.shoot(now)
    {
        state.shots.extend(shots);
        state.events.push(GameEvent::Fired);
    }

    for asteroid in &mut state.asteroids {
        asteroid.update(dt);
    }
    for shot in &mut state.shots {
        shot.update(dt);
    }
    for ufo in &mut state.ufos {
        ufo.update(dt, now);
    }
    for powerup in &mut state.powerups {
        powerup.update(dt);
    }
    for explosion in &mut state.explosions {
        explosion.age += dt;
    }
    state.explosions.retain(|e| e.age < EXPLOSION_DURATION);

    // --- Collision phase ---
    resolve_collisions(state);

    // --- Cleanup: no dead entity survives into the next tick ---
    state.asteroids.retain(|a| a.body.alive);
    state.shots.retain(|s| s.body.alive);
    state.ufos.retain(|u| u.body.alive);
    state.powerups.retain(|p| p.body.alive);
}

/// Countdown-driven spawns: UFO, interval power-up, asteroid field
fn spawn_phase(state: &mut GameState, dt: f32) {
    state.ufo_spawn_timer -= dt;
    if state.ufo_spawn_timer <= 0.0 {
        spawn_ufo(state);
        state.ufo_spawn_timer = state
            .rng
            .random_range(UFO_MIN_SPAWN_TIME..=UFO_MAX_SPAWN_TIME);
    }

    state.powerup_spawn_timer -= dt;
    if state.powerup_spawn_timer <= 0.0 {
        let pos = state.random_outside_position();
        let vel = state.random_velocity(POWERUP_SPEED_MIN, POWERUP_SPEED_MAX);
        let kind = PowerUpKind::weighted_draw(&mut state.rng);
        log::debug!("Spawning {kind:?} power-up at {pos}");
        state.powerups.push(PowerUp::new(pos, vel, kind));
        state.powerup_spawn_timer = POWERUP_SPAWN_INTERVAL;
    }

    if let Some(asteroid) = state.field.update(dt, &mut state.rng) {
        state.asteroids.push(asteroid);
    }
}

/// A UFO enters from a random side and traverses to the other
fn spawn_ufo(state: &mut GameState) {
    let from_left = state.rng.random_bool(0.5);
    let y = state
        .rng
        .random_range(UFO_SPAWN_MARGIN..SCREEN_HEIGHT - UFO_SPAWN_MARGIN);
    let (x, vel) = if from_left {
        (-UFO_RADIUS, Vec2::new(UFO_SPEED, 0.0))
    } else {
        (SCREEN_WIDTH + UFO_RADIUS, Vec2::new(-UFO_SPEED, 0.0))
    };
    log::debug!("UFO entering from the {}", if from_left { "left" } else { "right" });
    state.ufos.push(Ufo::new(Vec2::new(x, y), vel));
}

/// Fixed-priority pairwise collision resolution
fn resolve_collisions(state: &mut GameState) {
    let now = state.time_secs;

    // a) Player vs asteroids: first hit only, one life at most per frame
    let player_body = state.player.body;
    if !state.player.invulnerable()
        && state
            .asteroids
            .iter()
            .any(|a| a.body.alive && a.body.collides_with(&player_body))
    {
        player_hit(state);
    }

    // b) Player vs UFOs: contact destroys the UFO and, unless shielded,
    //    costs a life
    let player_body = state.player.body;
    let rammed_ufo = state
        .ufos
        .iter()
        .position(|u| u.body.alive && u.body.collides_with(&player_body));
    if let Some(i) = rammed_ufo {
        state.ufos[i].body.alive = false;
        player_hit(state);
    }

    // c) Shots vs asteroids: split, destroy the shot, award by tier
    let mut spawned_children = Vec::new();
    for i in 0..state.asteroids.len() {
        if !state.asteroids[i].body.alive {
            continue;
        }
        let mut was_hit = false;
        for shot in &mut state.shots {
            if shot.body.alive && shot.body.collides_with(&state.asteroids[i].body) {
                shot.body.alive = false;
                was_hit = true;
                break;
            }
        }
        if was_hit {
            let pos = state.asteroids[i].body.pos;
            let points = state.asteroids[i].points();
            spawned_children.extend(state.asteroids[i].split(&mut state.rng));
            state.explosions.push(super::state::Explosion::new(pos));
            state.events.push(GameEvent::Explosion);
            state.add_score(points);
        }
    }
    state.asteroids.extend(spawned_children);

    // d) Shots vs UFOs: destroy both, 50% chance to drop a power-up
    let mut drops = Vec::new();
    for i in 0..state.ufos.len() {
        if !state.ufos[i].body.alive {
            continue;
        }
        for shot in &mut state.shots {
            if shot.body.alive && shot.body.collides_with(&state.ufos[i].body) {
                shot.body.alive = false;
                state.ufos[i].body.alive = false;
                drops.push((state.ufos[i].body.pos, state.ufos[i].points()));
                break;
            }
        }
    }
    for (pos, points) in drops {
        state.explosions.push(super::state::Explosion::new(pos));
        state.events.push(GameEvent::Explosion);
        state.events.push(GameEvent::UfoDestroyed);
        if state.rng.random_bool(POWERUP_DROP_CHANCE) {
            let vel = state.random_velocity(POWERUP_DROP_SPEED_MIN, POWERUP_DROP_SPEED_MAX);
            let kind = PowerUpKind::weighted_draw(&mut state.rng);
            state.powerups.push(PowerUp::new(pos, vel, kind));
        }
        state.add_score(points);
    }

    // e) Player vs power-ups: collect on touch
    let player_body = state.player.body;
    let mut collected = Vec::new();
    for powerup in &mut state.powerups {
        if powerup.body.alive && powerup.body.collides_with(&player_body) {
            powerup.body.alive = false;
            collected.push(powerup.kind);
        }
    }
    for kind in collected {
        apply_powerup(state, kind, now);
        state.events.push(GameEvent::PowerUpCollected);
    }
}

/// Lethal-hit consequence: life loss, grace period, and the blast-radius
/// mercy that clears asteroids crowding the respawn point (removed
/// outright, not split, but still worth their points).
fn player_hit(state: &mut GameState) {
    if !state.player.take_hit() {
        return;
    }
    let pos = state.player.body.pos;
    state.explosions.push(super::state::Explosion::new(pos));
    state.events.push(GameEvent::Explosion);

    let blast = PLAYER_BLAST_FACTOR * state.player.body.radius;
    let mut blast_points = 0;
    for asteroid in &mut state.asteroids {
        if asteroid.body.alive && asteroid.body.pos.distance(pos) <= blast {
            asteroid.body.alive = false;
            blast_points += asteroid.points();
            state.explosions.push(super::state::Explosion::new(asteroid.body.pos));
            state.events.push(GameEvent::Explosion);
        }
    }
    state.add_score(blast_points);

    if state.player.lives == 0 {
        let score = state.score();
        log::info!("Game over with score {score}");
        state.events.push(GameEvent::GameOver { score });
        state.phase = GamePhase::GameOver;
    }
}

/// Effect dispatch for a collected power-up. Threat routes to the
/// asteroid field; nova fires immediately through the world's shot list.
fn apply_powerup(state: &mut GameState, kind: PowerUpKind, now: f32) {
    log::debug!("Collected {kind:?}");
    match kind {
        PowerUpKind::Shield => state.player.add_shield(kind.duration()),
        PowerUpKind::FastFire => state.player.stack_fast_fire(now),
        PowerUpKind::Spread => state.player.stack_spread(now),
        PowerUpKind::Threat => state.field.trigger_threat(kind.duration()),
        PowerUpKind::Nova => {
            let ring = state.player.nova_shots();
            state.shots.extend(ring);
            state.events.push(GameEvent::Fired);
        }
    }
}

/// Demo-mode pilot: point at the nearest threat, keep some way on, and
/// hold the trigger down.
fn autopilot(state: &GameState, mut input: TickInput) -> TickInput {
    let player = &state.player;
    let target = state
        .asteroids
        .iter()
        .filter(|a| a.body.alive)
        .map(|a| a.body.pos)
        .chain(state.ufos.iter().filter(|u| u.body.alive).map(|u| u.body.pos))
        .min_by(|a, b| {
            let da = player.body.pos.distance_squared(*a);
            let db = player.body.pos.distance_squared(*b);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(target) = target {
        let to_target = target - player.body.pos;
        let desired = to_target.x.atan2(-to_target.y).to_degrees();
        let mut delta = (desired - player.rotation).rem_euclid(360.0);
        if delta > 180.0 {
            delta -= 360.0;
        }
        input.turn_left = delta < -2.0;
        input.turn_right = delta > 2.0;
        // Close the range only while roughly on target and not on top of it
        input.thrust_forward = delta.abs() < 30.0 && to_target.length() > 250.0;
    } else {
        input.thrust_forward = false;
    }
    input.fire = true;
    input
}
