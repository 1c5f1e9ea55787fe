//! Simulation engine: owns the world and applies player intents
//!
//! All mutation goes through here. Conditions worth reacting to are queued in
//! the [`Outbox`] and drained by the session controller.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::events::{Outbox, SimEvent};
use super::spawn;
use super::state::{Narrative, Projectile, WorldState};
use super::tick;
use crate::audio::Cue;
use crate::consts::*;

pub struct SimulationEngine {
    world: WorldState,
    rng: Pcg32,
    outbox: Outbox,
}

impl SimulationEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            world: WorldState::new(seed),
            rng: Pcg32::seed_from_u64(seed),
            outbox: Outbox::default(),
        }
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Replace the world with the default snapshot.
    ///
    /// The RNG keeps running so consecutive sessions spawn differently.
    pub fn reset(&mut self) {
        self.world = WorldState::new(self.world.seed);
        self.outbox.clear();
    }

    /// Advance one tick
    pub fn advance(&mut self) {
        tick::advance(&mut self.world, &mut self.outbox);
    }

    /// Point the craft at a viewport position
    pub fn aim(&mut self, x: f32, y: f32) {
        self.world.aim_target = Vec2::new(x, y);
        let center = self.world.viewport.center();
        let opp = center.y - y;
        let adj = center.x - x;
        self.world.avatar.rotation = opp.atan2(adj).to_degrees();
    }

    /// Engage or release the main engine. Always off without fuel.
    pub fn set_thrust(&mut self, engaged: bool) {
        self.world.thrust_engaged = engaged && self.world.resources.fuel > 0.0;
    }

    /// Fire a laser burst from the avatar. No-op when out of ammo.
    pub fn fire(&mut self) {
        let world = &mut self.world;
        if world.resources.ammo == 0 {
            return;
        }
        world.resources.ammo -= 1;

        if (world.resources.ammo as f32) < LOW_RESOURCE_THRESHOLD
            && world.narrative.announce(Narrative::LowAmmo)
        {
            self.outbox.emit(SimEvent::LowAmmo);
        }

        world.projectiles.push(Projectile {
            pos: world.avatar.pos,
            rotation: world.avatar.rotation,
            range: LASER_RANGE,
        });
        self.outbox.cue(Cue::ShotFired);
    }

    /// Update viewport extents used by `aim`
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.viewport.width = width;
        self.world.viewport.height = height;
    }

    pub fn spawn_stars(&mut self) {
        spawn::spawn_stars(&mut self.world, &mut self.rng);
    }

    pub fn spawn_enemies(&mut self) {
        spawn::spawn_enemies(&mut self.world, &mut self.rng);
    }

    /// Take queued domain events in emission order
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.outbox.take_events()
    }

    /// Take queued sound cues in emission order
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        self.outbox.take_cues()
    }
}
