//! Presentation/audio boundary
//!
//! Screens, sprites and sound playback live behind this trait. They only read
//! the world; anything they want to change comes back as a
//! [`SessionEvent`](super::SessionEvent).

use crate::audio::Cue;
use crate::sim::{SessionState, WorldState};

pub trait Presenter {
    /// Current render-surface size (width, height)
    fn viewport(&self) -> (f32, f32);

    /// The session moved to a new state: swap screens and re-attach input
    fn state_changed(&mut self, from: SessionState, to: SessionState, world: &WorldState);

    /// Redraw after a simulation tick
    fn frame(&mut self, world: &WorldState);

    /// Play or stop a sound
    fn cue(&mut self, cue: Cue);
}
