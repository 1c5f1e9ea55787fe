//! Fixed-interval simulation tick
//!
//! Advances the world by one tick. The step order is part of the contract:
//! navigation, oxygen, engine, avatar, camera, projectiles, enemies,
//! explosions.

use super::events::{Outbox, SimEvent};
use super::state::{Explosion, Narrative, SessionState, WorldState};
use crate::audio::Cue;
use crate::consts::*;
use crate::facing;

/// Advance the world by one tick
pub fn advance(world: &mut WorldState, out: &mut Outbox) {
    // Fade-out only counts down, nothing moves
    if world.session_state == SessionState::GameOver {
        world.fade_counter = world.fade_counter.saturating_sub(1);
        if world.fade_counter == 0 {
            out.emit(SimEvent::FadeComplete);
        }
        return;
    }

    world.time_ticks += 1;

    update_navigation(world, out);
    update_oxygen(world, out);
    update_engine(world, out);

    // Explicit Euler, no drag
    world.avatar.pos += world.avatar.vel;
    world.view_center = world.avatar.pos;

    update_projectiles(world);
    let spawned = update_enemies(world, out);
    update_explosions(world, spawned);
}

/// FTL arming, standby and countdown
fn update_navigation(world: &mut WorldState, out: &mut Outbox) {
    let dist = world.distance_to_base();

    if !world.ftl_armed && dist > FTL_ARMED_RANGE {
        world.ftl_armed = true;
        if world.narrative.announce(Narrative::GoodHunting) {
            out.emit(SimEvent::GoodHunting);
        }
    }

    if world.ftl_armed && dist < FTL_READY_RANGE {
        if !world.ftl_ready {
            out.emit(SimEvent::FtlStandby);
        }
        world.ftl_ready = true;
        world.ftl_countdown = world.ftl_countdown.saturating_sub(1);
    } else {
        world.ftl_ready = false;
        world.ftl_countdown = FTL_COUNT_MAX;
    }

    if world.ftl_countdown == 0 {
        out.emit(SimEvent::JumpReady);
    }
}

fn update_oxygen(world: &mut WorldState, out: &mut Outbox) {
    let res = &mut world.resources;
    if res.oxygen <= 0.0 {
        res.oxygen = 0.0;
        out.emit(SimEvent::OxygenEmpty);
    } else {
        res.oxygen -= OXYGEN_PER_TICK;
    }

    if res.oxygen < LOW_RESOURCE_THRESHOLD && world.narrative.announce(Narrative::LowOxygen) {
        out.emit(SimEvent::LowOxygen);
    }
}

/// Thrust, fuel burn and engine sound edges
fn update_engine(world: &mut WorldState, out: &mut Outbox) {
    if !world.thrust_engaged {
        if world.engine_burning {
            world.engine_burning = false;
            out.cue(Cue::EngineStop);
        }
        return;
    }

    world.avatar.vel += facing(world.avatar.rotation) * THRUST_POWER;
    world.resources.fuel -= FUEL_PER_TICK;

    if !world.engine_burning {
        world.engine_burning = true;
        out.cue(Cue::EngineStart);
    }

    if world.resources.fuel < LOW_RESOURCE_THRESHOLD
        && world.narrative.announce(Narrative::LowFuel)
    {
        out.emit(SimEvent::LowFuel);
    }

    if world.resources.fuel <= 0.0 {
        world.resources.fuel = 0.0;
        world.thrust_engaged = false;
        out.emit(SimEvent::FuelEmpty);
    }
}

fn update_projectiles(world: &mut WorldState) {
    for p in &mut world.projectiles {
        p.pos += facing(p.rotation) * LASER_SPEED;
        p.range -= LASER_SPEED;
    }
    world.projectiles.retain(|p| p.range > 0.0);
}

/// Drift enemies and resolve projectile hits. Returns explosions to spawn.
///
/// Hits are tested against where the enemy was at the start of the tick.
/// Dead enemies keep drifting but are never damaged again.
fn update_enemies(world: &mut WorldState, out: &mut Outbox) -> Vec<Explosion> {
    let mut spawned = Vec::new();
    let hit_radius_sq = HIT_RADIUS * HIT_RADIUS;

    for (idx, enemy) in world.enemies.iter_mut().enumerate() {
        let anchor = enemy.pos;
        enemy.pos += enemy.vel;

        if !enemy.is_alive() {
            continue;
        }

        let hits = world
            .projectiles
            .iter()
            .filter(|p| p.pos.distance_squared(anchor) < hit_radius_sq)
            .count() as i32;
        if hits == 0 {
            continue;
        }

        enemy.health -= hits * LASER_DAMAGE;
        log::debug!(
            "enemy {} hit x{} at ({:.0},{:.0}), health {}",
            idx,
            hits,
            anchor.x,
            anchor.y,
            enemy.health
        );

        if !enemy.is_alive() {
            spawned.push(Explosion { pos: anchor, age: 0 });
            world.score += KILL_SCORE;
            out.cue(Cue::EnemyDestroyed);

            if world.score >= NICE_SHOT_SCORE && world.narrative.announce(Narrative::NiceShot) {
                out.emit(SimEvent::NiceShot);
            }
        }
    }

    spawned
}

fn update_explosions(world: &mut WorldState, spawned: Vec<Explosion>) {
    for boom in &mut world.explosions {
        boom.age += 1;
    }
    world.explosions.retain(|b| b.age < EXPLOSION_LIFETIME);
    world.explosions.extend(spawned);
}
