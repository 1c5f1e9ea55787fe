//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-interval tick per `advance`, no wall clock
//! - Seeded RNG only, used at session start
//! - Stable iteration order (enemies are never removed)
//! - No rendering or audio playback

pub mod engine;
pub mod events;
pub mod spawn;
pub mod state;
pub mod tick;

pub use engine::SimulationEngine;
pub use events::{Outbox, SimEvent};
pub use state::{
    Avatar, Enemy, Explosion, Narrative, NarrativeLog, Projectile, Resources, SessionState, Star,
    Viewport, WorldState,
};
pub use tick::advance;
