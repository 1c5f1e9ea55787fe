//! Session-start population of the starfield and enemy fleet
//!
//! Positions are sampled uniformly in polar coordinates around home base.

use std::f32::consts::TAU;

use rand::Rng;

use super::state::{Enemy, Star, WorldState};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Scatter `STAR_COUNT` background stars within `STAR_RANGE`
pub fn spawn_stars<R: Rng>(world: &mut WorldState, rng: &mut R) {
    for _ in 0..STAR_COUNT {
        let distance = STAR_RANGE * rng.random::<f32>();
        let direction = rng.random_range(0.0..TAU);
        let rotation = rng.random_range(0.0..TAU);
        world.stars.push(Star {
            pos: polar_to_cartesian(distance, direction),
            rotation,
        });
    }
}

/// Place `ENEMY_COUNT` enemies in the ring between `ENEMY_MIN_RANGE` and
/// `ENEMY_MIN_RANGE + ENEMY_VAR_RANGE`, each drifting on a random heading.
pub fn spawn_enemies<R: Rng>(world: &mut WorldState, rng: &mut R) {
    for _ in 0..ENEMY_COUNT {
        let distance = ENEMY_MIN_RANGE + ENEMY_VAR_RANGE * rng.random::<f32>();
        let direction = rng.random_range(0.0..TAU);
        let heading = rng.random_range(0.0..TAU);
        let speed = ENEMY_SPEED_MAX * rng.random::<f32>();

        world.enemies.push(Enemy {
            pos: polar_to_cartesian(distance, direction),
            rotation: heading.to_degrees(),
            vel: polar_to_cartesian(speed, heading),
            health: ENEMY_HEALTH,
        });
    }
    log::info!("Spawned {} enemies", ENEMY_COUNT);
}
