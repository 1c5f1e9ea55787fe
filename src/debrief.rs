//! Mission report shown after the fade-out

use serde::{Deserialize, Serialize};

use crate::sim::WorldState;

/// How the mission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// FTL jump home (score doubled)
    Jumped,
    FuelDepleted,
    OxygenDepleted,
    /// Both tanks ran dry
    Stranded,
}

impl Outcome {
    pub fn survived(&self) -> bool {
        *self == Outcome::Jumped
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Outcome::Jumped => "FTL Jump: Successful (x2 Bonus)",
            Outcome::FuelDepleted => "Fuel Cells Depleted",
            Outcome::OxygenDepleted => "Oxygen Tanks Depleted",
            Outcome::Stranded => "Fuel Cells and Oxygen Tanks Depleted",
        }
    }
}

/// End-of-session summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debrief {
    pub outcome: Outcome,
    pub score: u64,
    pub kills: usize,
    pub ticks: u64,
}

impl Debrief {
    pub fn from_world(world: &WorldState) -> Self {
        let fuel_out = world.resources.fuel <= 0.0;
        let oxygen_out = world.resources.oxygen <= 0.0;
        let outcome = match (fuel_out, oxygen_out) {
            (true, true) => Outcome::Stranded,
            (true, false) => Outcome::FuelDepleted,
            (false, true) => Outcome::OxygenDepleted,
            (false, false) => Outcome::Jumped,
        };

        Self {
            outcome,
            score: world.score,
            kills: world.enemies.iter().filter(|e| !e.is_alive()).count(),
            ticks: world.time_ticks,
        }
    }
}
