//! Sound cue identifiers
//!
//! The core only names cues; playing them is the presenter's job.

use serde::{Deserialize, Serialize};

use crate::sim::SimEvent;

/// Which mixer channel a cue belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CueCategory {
    Sfx,
    Music,
    Voice,
}

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Laser burst fired
    ShotFired,
    /// Enemy destroyed
    EnemyDestroyed,
    /// Main engine ignites
    EngineStart,
    /// Main engine cuts out
    EngineStop,
    /// Background music
    MusicStart,
    MusicStop,
    VoiceGoodHunting,
    VoiceNiceShot,
    VoiceLowAmmo,
    VoiceLowFuel,
    VoiceLowOxygen,
    VoiceStandby,
    /// FTL jump / mission over
    VoiceJump,
}

impl Cue {
    /// Asset identifier the presenter looks up
    pub fn asset_id(&self) -> &'static str {
        match self {
            Cue::ShotFired => "laser_shot",
            Cue::EnemyDestroyed => "explode",
            Cue::EngineStart | Cue::EngineStop => "engine",
            Cue::MusicStart | Cue::MusicStop => "bgm_music",
            Cue::VoiceGoodHunting => "tts_hunting",
            Cue::VoiceNiceShot => "tts_nice_shot",
            Cue::VoiceLowAmmo => "tts_low_ammo",
            Cue::VoiceLowFuel => "tts_low_fuel",
            Cue::VoiceLowOxygen => "tts_low_oxy",
            Cue::VoiceStandby => "tts_standby",
            Cue::VoiceJump => "tts_game_over",
        }
    }

    pub fn category(&self) -> CueCategory {
        match self {
            Cue::ShotFired | Cue::EnemyDestroyed | Cue::EngineStart | Cue::EngineStop => {
                CueCategory::Sfx
            }
            Cue::MusicStart | Cue::MusicStop => CueCategory::Music,
            _ => CueCategory::Voice,
        }
    }

    /// True for cues that silence their asset instead of starting it
    pub fn is_stop(&self) -> bool {
        matches!(self, Cue::EngineStop | Cue::MusicStop)
    }

    /// Voice line for a narrative event, if it has one
    pub fn voice_for(event: SimEvent) -> Option<Cue> {
        match event {
            SimEvent::GoodHunting => Some(Cue::VoiceGoodHunting),
            SimEvent::NiceShot => Some(Cue::VoiceNiceShot),
            SimEvent::LowAmmo => Some(Cue::VoiceLowAmmo),
            SimEvent::LowFuel => Some(Cue::VoiceLowFuel),
            SimEvent::LowOxygen => Some(Cue::VoiceLowOxygen),
            SimEvent::FtlStandby => Some(Cue::VoiceStandby),
            SimEvent::JumpReady => Some(Cue::VoiceJump),
            SimEvent::FuelEmpty | SimEvent::OxygenEmpty | SimEvent::FadeComplete => None,
        }
    }
}
