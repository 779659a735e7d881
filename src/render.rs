//! Presentation seam
//!
//! The sim never draws. A frontend implements [`Renderer`] and reads whatever
//! it needs off the [`GameState`] each frame; [`Hud`] pre-digests the handful
//! of derived readouts every frontend wants so the math lives in one place.

use crate::sim::{GamePhase, GameState};

/// Per-frame HUD readout derived from the sim state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    /// Seconds of hit protection left, zero when exposed
    pub shield_secs: f32,
    pub fast_fire_stacks: u32,
    pub spread_stacks: u32,
    pub threat_active: bool,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let now = state.time_secs;
        Self {
            score: state.score(),
            lives: state.player.lives,
            phase: state.phase,
            shield_secs: state.player.invulnerability_timer.max(0.0),
            fast_fire_stacks: state.player.fast_fire_level(now),
            spread_stacks: state.player.spread_level(),
            threat_active: state.field.threat_active(),
        }
    }
}

/// Drawing backend. Called once per rendered frame, after the sim has
/// caught up to real time.
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Backend for headless runs; draws nothing
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _state: &GameState) {}
}
