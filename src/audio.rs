//! Sound effect dispatch
//!
//! The sim emits [`GameEvent`]s; this module turns them into sound effect
//! requests and hands them to whatever backend is plugged in. The crate
//! ships no audio backend of its own, so the default sink just logs.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Shot fired
    Laser,
    /// Asteroid, UFO, or ship explosion
    Explosion,
    /// Power-up collected
    PickupCollect,
    /// UFO shot down
    UfoDown,
    /// Run ended
    GameOver,
}

impl SoundEffect {
    /// The effect a sim event maps to, if any
    pub fn for_event(event: &GameEvent) -> Option<SoundEffect> {
        match event {
            GameEvent::Fired => Some(SoundEffect::Laser),
            GameEvent::Explosion => Some(SoundEffect::Explosion),
            GameEvent::PowerUpCollected => Some(SoundEffect::PickupCollect),
            GameEvent::UfoDestroyed => Some(SoundEffect::UfoDown),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
        }
    }
}

/// Playback backend. Implementations live outside this crate.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, effect: SoundEffect, _volume: f32) {
        log::trace!("sound: {effect:?}");
    }
}

/// Audio manager for the game
pub struct AudioManager<S> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the sounds for a batch of drained sim events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        for event in events {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.sink.play(effect, vol);
            }
        }
    }
}
