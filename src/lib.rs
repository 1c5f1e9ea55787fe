//! Operation: Star Fighter - a piloted craft in an open arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, resources, spawning)
//! - `session`: Session state machine and event queue
//! - `audio`: Sound cue identifiers published to presentation
//! - `debrief`: End-of-mission summary
//! - `settings`: Runtime configuration
//! - `autopilot`: Demo pilot that plays through ordinary session events

pub mod audio;
pub mod autopilot;
pub mod debrief;
pub mod session;
pub mod settings;
pub mod sim;

pub use audio::Cue;
pub use debrief::{Debrief, Outcome};
pub use session::{Presenter, SessionController, SessionEvent};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Scheduler tick interval (~59 Hz)
    pub const TICK_INTERVAL_MS: u64 = 17;
    /// Ticks per displayed second (HUD countdowns)
    pub const TICKS_PER_SECOND: f32 = 60.0;

    /// Avatar acceleration per thrusting tick
    pub const THRUST_POWER: f32 = 0.1;
    /// Fuel consumed per thrusting tick
    pub const FUEL_PER_TICK: f32 = THRUST_POWER / 2.0;
    /// Oxygen consumed per tick
    pub const OXYGEN_PER_TICK: f32 = 1.0 / 60.0;

    /// Starting resources
    pub const START_FUEL: f32 = 120.0;
    pub const START_OXYGEN: f32 = 120.0;
    pub const START_AMMO: u32 = 100;
    pub const START_SHIELDS: u32 = 100;
    /// Warnings fire when a resource drops strictly below this
    pub const LOW_RESOURCE_THRESHOLD: f32 = 30.0;

    /// Laser projectiles
    pub const LASER_SPEED: f32 = 8.0;
    pub const LASER_RANGE: f32 = 400.0;
    pub const LASER_DAMAGE: i32 = 50;
    /// Projectile-enemy distance must be strictly below this to hit
    pub const HIT_RADIUS: f32 = 30.0;

    /// Background starfield
    pub const STAR_COUNT: usize = 150;
    pub const STAR_RANGE: f32 = 7000.0;

    /// Enemy spawning
    pub const ENEMY_COUNT: usize = 15;
    pub const ENEMY_SPEED_MAX: f32 = 2.0;
    pub const ENEMY_MIN_RANGE: f32 = 1000.0;
    pub const ENEMY_VAR_RANGE: f32 = 1500.0;
    pub const ENEMY_HEALTH: i32 = 100;

    /// Score
    pub const KILL_SCORE: u64 = 100;
    pub const NICE_SHOT_SCORE: u64 = 1000;

    /// FTL navigation
    pub const FTL_COUNT_MAX: u32 = 300;
    pub const FTL_ARMED_RANGE: f32 = 400.0;
    pub const FTL_READY_RANGE: f32 = 100.0;

    /// Explosions are kept while younger than this many ticks
    pub const EXPLOSION_LIFETIME: u32 = 64;
    /// Post-session fade length in ticks
    pub const FADE_TICKS: u32 = 120;

    /// Viewport used until the presenter reports its real size
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 500.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 500.0;
}

/// Forward unit vector for a rotation in degrees.
///
/// Rotation is measured from the aim point toward the viewport center, so the
/// craft (and its shots) travel opposite to `(cos r, sin r)`.
#[inline]
pub fn facing(rotation_deg: f32) -> Vec2 {
    -Vec2::from_angle(rotation_deg.to_radians())
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
