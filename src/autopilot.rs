//! Demo pilot - plays a session through ordinary input events
//!
//! Hunts the nearest live enemy while resources last, then flies home and
//! settles inside the ready radius to wait out the FTL countdown. It only ever
//! produces [`SessionEvent`]s, so it exercises the same paths as a player.

use glam::Vec2;

use crate::consts::*;
use crate::session::SessionEvent;
use crate::sim::WorldState;

/// Top speed the pilot steers for (units/tick)
const CRUISE_SPEED: f32 = 3.0;
/// Velocity error tolerated before burning
const STEER_DEADBAND: f32 = 0.15;
/// Distance from the viewport center of synthesized pointer positions
const AIM_REACH: f32 = 100.0;
/// Shots are only taken inside this distance
const FIRE_RANGE: f32 = LASER_RANGE - 50.0;
const FIRE_INTERVAL: u32 = 8;
/// Head home when oxygen or fuel drop below these
const RETURN_OXYGEN: f32 = 55.0;
const RETURN_FUEL: f32 = 25.0;

/// What the pilot is currently flying toward
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Goal {
    Hunt(Vec2),
    Home,
}

#[derive(Debug, Default)]
pub struct Autopilot {
    thrusting: bool,
    shot_cooldown: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goal(&self, world: &WorldState) -> Goal {
        let res = &world.resources;
        if res.oxygen < RETURN_OXYGEN || res.fuel < RETURN_FUEL || res.ammo == 0 {
            return Goal::Home;
        }

        let here = world.avatar.pos;
        world
            .live_enemies()
            .min_by(|a, b| {
                a.pos
                    .distance_squared(here)
                    .partial_cmp(&b.pos.distance_squared(here))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|e| Goal::Hunt(e.pos))
            .unwrap_or(Goal::Home)
    }

    /// Input for the coming tick
    pub fn plan(&mut self, world: &WorldState) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.shot_cooldown = self.shot_cooldown.saturating_sub(1);

        let (target, hunting) = match self.goal(world) {
            Goal::Hunt(pos) => (pos, true),
            Goal::Home => (Vec2::ZERO, false),
        };

        let to_target = target - world.avatar.pos;
        let dist = to_target.length();
        // Hold off a little from enemies, park right on base
        let standoff = if hunting { FIRE_RANGE / 2.0 } else { 0.0 };
        let speed = ((dist - standoff) / 60.0).clamp(0.0, CRUISE_SPEED);
        let desired = to_target.normalize_or_zero() * speed;
        let steer = desired - world.avatar.vel;

        let want_thrust = steer.length() > STEER_DEADBAND && world.resources.fuel > 0.0;
        let heading = if want_thrust { steer } else { to_target };
        if let Some(dir) = heading.try_normalize() {
            let aim = world.viewport.center() + dir * AIM_REACH;
            events.push(SessionEvent::PointerMove { x: aim.x, y: aim.y });
        }

        if want_thrust != self.thrusting {
            self.thrusting = want_thrust;
            events.push(if want_thrust {
                SessionEvent::PointerDown
            } else {
                SessionEvent::PointerUp
            });
        }

        if hunting && !want_thrust && dist < FIRE_RANGE && self.shot_cooldown == 0 {
            events.push(SessionEvent::FireRequested);
            self.shot_cooldown = FIRE_INTERVAL;
        }

        events
    }
}
