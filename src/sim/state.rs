//! World state and core simulation types
//!
//! Everything the presentation reads each tick lives here. The aggregate is
//! owned by [`SimulationEngine`](super::SimulationEngine) and only mutated
//! through it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current session phase (mirrors the session controller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the first tick to reset the world
    #[default]
    Init,
    /// Title menu
    Menu,
    /// Active flight
    Running,
    /// Fade-out after fuel/oxygen depletion or a jump
    GameOver,
    /// Mission report
    Debrief,
    /// Credits screen
    Credits,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Init => "init",
            SessionState::Menu => "menu",
            SessionState::Running => "running",
            SessionState::GameOver => "game-over",
            SessionState::Debrief => "debrief",
            SessionState::Credits => "credits",
        }
    }
}

/// The player's craft
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    /// Degrees, derived from the last aim command
    pub rotation: f32,
    pub vel: Vec2,
}

/// A laser burst in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Degrees, fixed at the moment of firing
    pub rotation: f32,
    pub range: f32,
}

/// A hostile ship drifting on a fixed velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Degrees, sprite orientation only
    pub rotation: f32,
    pub vel: Vec2,
    pub health: i32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// An explosion animation anchored where an enemy died
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec2,
    pub age: u32,
}

/// Static background star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Radians
    pub rotation: f32,
}

/// Consumable resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resources {
    pub fuel: f32,
    pub oxygen: f32,
    pub ammo: u32,
    pub shields: u32,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            fuel: START_FUEL,
            oxygen: START_OXYGEN,
            ammo: START_AMMO,
            shields: START_SHIELDS,
        }
    }
}

/// Viewport extents (render surface size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Voice lines that may only be announced once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Narrative {
    GoodHunting,
    NiceShot,
    LowAmmo,
    LowFuel,
    LowOxygen,
}

impl Narrative {
    pub const ALL: [Narrative; 5] = [
        Narrative::GoodHunting,
        Narrative::NiceShot,
        Narrative::LowAmmo,
        Narrative::LowFuel,
        Narrative::LowOxygen,
    ];

    fn index(self) -> usize {
        match self {
            Narrative::GoodHunting => 0,
            Narrative::NiceShot => 1,
            Narrative::LowAmmo => 2,
            Narrative::LowFuel => 3,
            Narrative::LowOxygen => 4,
        }
    }
}

/// One-shot narrative flags, keyed by [`Narrative`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeLog {
    announced: [bool; 5],
}

impl NarrativeLog {
    /// Mark `kind` announced. Returns true only the first time.
    pub fn announce(&mut self, kind: Narrative) -> bool {
        let slot = &mut self.announced[kind.index()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn was_announced(&self, kind: Narrative) -> bool {
        self.announced[kind.index()]
    }
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Seed used for spawning in this session
    pub seed: u64,
    /// Mirrors the session controller's state
    pub session_state: SessionState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub viewport: Viewport,
    /// Camera center, tracks the avatar
    pub view_center: Vec2,
    /// Last commanded aim point (viewport coordinates)
    pub aim_target: Vec2,
    pub avatar: Avatar,
    /// Player intent to burn the main engine
    pub thrust_engaged: bool,
    /// Whether the engine was burning last tick (engine sound edges)
    pub engine_burning: bool,
    pub resources: Resources,
    pub score: u64,
    pub projectiles: Vec<Projectile>,
    /// Dead enemies stay in place so indices remain stable
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    pub stars: Vec<Star>,
    pub ftl_armed: bool,
    pub ftl_ready: bool,
    pub ftl_countdown: u32,
    pub fade_counter: u32,
    pub narrative: NarrativeLog,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl WorldState {
    /// Fresh pre-menu snapshot
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            session_state: SessionState::Init,
            time_ticks: 0,
            viewport: Viewport::default(),
            view_center: Vec2::ZERO,
            aim_target: Vec2::ZERO,
            avatar: Avatar::default(),
            thrust_engaged: false,
            engine_burning: false,
            resources: Resources::default(),
            score: 0,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            stars: Vec::new(),
            ftl_armed: false,
            ftl_ready: false,
            ftl_countdown: FTL_COUNT_MAX,
            fade_counter: FADE_TICKS,
            narrative: NarrativeLog::default(),
        }
    }

    /// Distance from the avatar to home base (origin)
    pub fn distance_to_base(&self) -> f32 {
        self.avatar.pos.length()
    }

    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.is_alive())
    }

    /// Project a world position into viewport coordinates around the camera
    pub fn to_view(&self, pos: Vec2) -> Vec2 {
        pos - self.view_center + self.viewport.center()
    }

    /// Fade-out opacity, 1.0 at the start of the fade and 0.0 at the end
    pub fn fade_opacity(&self) -> f32 {
        self.fade_counter as f32 / FADE_TICKS as f32
    }

    /// Whole seconds until the FTL jump (only meaningful while ready)
    pub fn ftl_seconds_remaining(&self) -> u32 {
        (self.ftl_countdown as f32 / TICKS_PER_SECOND).floor() as u32
    }
}
