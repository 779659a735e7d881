//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod entity;
pub mod player;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidField};
pub use entity::Body;
pub use player::Player;
pub use state::{
    Explosion, GameEvent, GamePhase, GameState, PowerUp, PowerUpKind, Shot, Ufo,
};
pub use tick::{TickInput, tick};
