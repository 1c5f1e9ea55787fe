//! Domain events raised by the simulation
//!
//! The engine never changes session state itself. It reports conditions here
//! and the session controller decides what they mean.

use serde::{Deserialize, Serialize};

use crate::audio::Cue;

/// Conditions detected during a tick or a player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Avatar left the armed radius for the first time
    GoodHunting,
    /// Avatar entered the ready radius while armed
    FtlStandby,
    /// FTL countdown reached zero
    JumpReady,
    FuelEmpty,
    OxygenEmpty,
    LowAmmo,
    LowFuel,
    LowOxygen,
    /// Score milestone reached
    NiceShot,
    /// Post-session fade finished
    FadeComplete,
}

/// Output collected by the engine between drains
#[derive(Debug, Default)]
pub struct Outbox {
    events: Vec<SimEvent>,
    cues: Vec<Cue>,
}

impl Outbox {
    pub fn emit(&mut self, event: SimEvent) {
        log::debug!("sim event {:?}", event);
        self.events.push(event);
    }

    pub fn cue(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    #[cfg(test)]
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    #[cfg(test)]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn take_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.cues.clear();
    }
}
