//! Session state machine
//!
//! Every input, timer tick and simulation event goes through one FIFO queue
//! and is handled to completion before the next one is taken. Simulation
//! events raised while handling are appended to the back of the same queue.

pub mod presenter;

use std::collections::VecDeque;

use crate::audio::Cue;
use crate::debrief::Debrief;
use crate::sim::{SessionState, SimEvent, SimulationEngine, WorldState};

pub use presenter::Presenter;

/// Everything the session reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// Scheduler tick
    Tick,
    PointerDown,
    PointerUp,
    /// Pointer position in viewport coordinates
    PointerMove { x: f32, y: f32 },
    ViewportResized { width: f32, height: f32 },
    FireRequested,
    StartRequested,
    CreditsRequested,
    ExitRequested,
    /// Raised by the simulation
    Sim(SimEvent),
}

impl From<SimEvent> for SessionEvent {
    fn from(event: SimEvent) -> Self {
        SessionEvent::Sim(event)
    }
}

pub struct SessionController<P: Presenter> {
    engine: SimulationEngine,
    presenter: P,
    state: SessionState,
    queue: VecDeque<SessionEvent>,
}

impl<P: Presenter> SessionController<P> {
    pub fn new(engine: SimulationEngine, presenter: P) -> Self {
        Self {
            engine,
            presenter,
            state: SessionState::Init,
            queue: VecDeque::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn world(&self) -> &WorldState {
        self.engine.world()
    }

    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mission report, available once the session reaches the debrief
    pub fn debrief(&self) -> Option<Debrief> {
        (self.state == SessionState::Debrief).then(|| Debrief::from_world(self.engine.world()))
    }

    /// Queue an event without processing it
    pub fn push(&mut self, event: SessionEvent) {
        self.queue.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Process queued events in arrival order until the queue is empty
    pub fn run_pending(&mut self) {
        while let Some(event) = self.queue.pop_front() {
            self.handle(event);
        }
    }

    /// Queue an event and drain everything it causes
    pub fn dispatch(&mut self, event: SessionEvent) {
        self.push(event);
        self.run_pending();
    }

    fn handle(&mut self, event: SessionEvent) {
        let next = self.transition(event);
        self.flush_engine_output();
        if next != self.state {
            self.enter(next);
        }
    }

    /// Run the handler for `event` in the current state and pick the next state
    fn transition(&mut self, event: SessionEvent) -> SessionState {
        use SessionEvent as E;
        use SessionState as S;

        match (self.state, event) {
            (S::Init, E::Tick) => {
                self.engine.reset();
                S::Menu
            }

            (S::Menu, E::StartRequested) => {
                let (width, height) = self.presenter.viewport();
                self.engine.resize(width, height);
                self.engine.spawn_stars();
                self.engine.spawn_enemies();
                self.presenter.cue(Cue::MusicStart);
                S::Running
            }
            (S::Menu, E::CreditsRequested) => S::Credits,

            (S::Running | S::GameOver, E::Tick) => {
                self.engine.advance();
                self.presenter.frame(self.engine.world());
                self.state
            }

            (S::Running, E::PointerDown) => {
                self.engine.set_thrust(true);
                S::Running
            }
            (S::Running, E::PointerUp) => {
                self.engine.set_thrust(false);
                S::Running
            }
            (S::Running, E::PointerMove { x, y }) => {
                self.engine.aim(x, y);
                S::Running
            }
            (S::Running, E::ViewportResized { width, height }) => {
                self.engine.resize(width, height);
                S::Running
            }
            (S::Running, E::FireRequested) => {
                self.engine.fire();
                S::Running
            }
            (S::Running, E::Sim(SimEvent::JumpReady)) => {
                let world = self.engine.world_mut();
                world.score *= 2;
                log::info!("FTL jump, final score {}", world.score);
                self.presenter.cue(Cue::VoiceJump);
                S::GameOver
            }
            (S::Running, E::Sim(SimEvent::FuelEmpty | SimEvent::OxygenEmpty)) => {
                log::info!("{:?}, mission over", event);
                S::GameOver
            }
            (
                S::Running,
                E::Sim(
                    narrative @ (SimEvent::GoodHunting
                    | SimEvent::NiceShot
                    | SimEvent::LowAmmo
                    | SimEvent::LowFuel
                    | SimEvent::LowOxygen
                    | SimEvent::FtlStandby),
                ),
            ) => {
                if let Some(cue) = Cue::voice_for(narrative) {
                    self.presenter.cue(cue);
                }
                S::Running
            }

            (S::GameOver, E::Sim(SimEvent::FadeComplete)) => {
                self.presenter.cue(Cue::MusicStop);
                self.presenter.cue(Cue::EngineStop);
                S::Debrief
            }

            (S::Debrief | S::Credits, E::ExitRequested) => S::Init,

            (state, event) => {
                log::debug!("Ignoring {:?} in {}", event, state.as_str());
                state
            }
        }
    }

    fn flush_engine_output(&mut self) {
        for cue in self.engine.drain_cues() {
            self.presenter.cue(cue);
        }
        self.queue
            .extend(self.engine.drain_events().into_iter().map(SessionEvent::Sim));
    }

    fn enter(&mut self, next: SessionState) {
        let prev = self.state;
        self.state = next;
        self.engine.world_mut().session_state = next;
        log::info!("Session {} -> {}", prev.as_str(), next.as_str());
        self.presenter
            .state_changed(prev, next, self.engine.world());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::debrief::Outcome;
    use glam::Vec2;

    struct Recorder {
        viewport: (f32, f32),
        transitions: Vec<(SessionState, SessionState)>,
        cues: Vec<Cue>,
        frames: usize,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                viewport: (800.0, 600.0),
                transitions: Vec::new(),
                cues: Vec::new(),
                frames: 0,
            }
        }
    }

    impl Presenter for Recorder {
        fn viewport(&self) -> (f32, f32) {
            self.viewport
        }

        fn state_changed(&mut self, from: SessionState, to: SessionState, world: &WorldState) {
            assert_eq!(world.session_state, to);
            self.transitions.push((from, to));
        }

        fn frame(&mut self, _world: &WorldState) {
            self.frames += 1;
        }

        fn cue(&mut self, cue: Cue) {
            self.cues.push(cue);
        }
    }

    fn controller() -> SessionController<Recorder> {
        SessionController::new(SimulationEngine::new(21), Recorder::new())
    }

    fn running() -> SessionController<Recorder> {
        let mut ctl = controller();
        ctl.dispatch(SessionEvent::Tick);
        ctl.dispatch(SessionEvent::StartRequested);
        assert_eq!(ctl.state(), SessionState::Running);
        ctl
    }

    #[test]
    fn test_menu_to_running() {
        let mut ctl = controller();
        ctl.dispatch(SessionEvent::Tick);
        assert_eq!(ctl.state(), SessionState::Menu);
        assert_eq!(ctl.world().session_state, SessionState::Menu);

        ctl.dispatch(SessionEvent::StartRequested);
        assert_eq!(ctl.state(), SessionState::Running);

        let world = ctl.world();
        assert_eq!(world.viewport.width, 800.0);
        assert_eq!(world.viewport.height, 600.0);
        assert_eq!(world.enemies.len(), ENEMY_COUNT);
        assert_eq!(world.stars.len(), STAR_COUNT);
        assert_eq!(ctl.presenter().cues, vec![Cue::MusicStart]);
        assert_eq!(
            ctl.presenter().transitions,
            vec![
                (SessionState::Init, SessionState::Menu),
                (SessionState::Menu, SessionState::Running),
            ]
        );
    }

    #[test]
    fn test_credits_cycle() {
        let mut ctl = controller();
        ctl.dispatch(SessionEvent::Tick);
        ctl.dispatch(SessionEvent::CreditsRequested);
        assert_eq!(ctl.state(), SessionState::Credits);

        ctl.dispatch(SessionEvent::Tick);
        assert_eq!(ctl.state(), SessionState::Credits);

        ctl.dispatch(SessionEvent::ExitRequested);
        assert_eq!(ctl.state(), SessionState::Init);
        ctl.dispatch(SessionEvent::Tick);
        assert_eq!(ctl.state(), SessionState::Menu);
        assert_eq!(ctl.presenter().frames, 0);
    }

    #[test]
    fn test_input_routing() {
        let mut ctl = running();
        let changes = ctl.presenter().transitions.len();

        ctl.dispatch(SessionEvent::ViewportResized {
            width: 500.0,
            height: 500.0,
        });
        ctl.dispatch(SessionEvent::PointerMove { x: 250.0, y: 0.0 });
        assert!((ctl.world().avatar.rotation - 90.0).abs() < 1e-4);
        assert_eq!(ctl.world().aim_target, Vec2::new(250.0, 0.0));

        ctl.dispatch(SessionEvent::PointerDown);
        assert!(ctl.world().thrust_engaged);
        ctl.dispatch(SessionEvent::Tick);
        assert!(ctl.world().avatar.vel.y < 0.0);
        ctl.dispatch(SessionEvent::PointerUp);
        assert!(!ctl.world().thrust_engaged);

        ctl.dispatch(SessionEvent::FireRequested);
        assert_eq!(ctl.world().projectiles.len(), 1);
        assert_eq!(ctl.world().resources.ammo, START_AMMO - 1);

        // Same-state events never redraw
        assert_eq!(ctl.presenter().transitions.len(), changes);
        assert_eq!(ctl.presenter().frames, 1);
        assert!(ctl.presenter().cues.contains(&Cue::EngineStart));
        assert!(ctl.presenter().cues.contains(&Cue::ShotFired));
    }

    #[test]
    fn test_oxygen_depletion_to_debrief() {
        let mut ctl = running();
        ctl.engine_mut().world_mut().resources.oxygen = OXYGEN_PER_TICK / 2.0;

        ctl.dispatch(SessionEvent::Tick);
        assert_eq!(ctl.state(), SessionState::Running);
        assert!(ctl.presenter().cues.contains(&Cue::VoiceLowOxygen));

        ctl.dispatch(SessionEvent::Tick);
        assert_eq!(ctl.state(), SessionState::GameOver);
        assert!(ctl.debrief().is_none());

        // Input is ignored during the fade
        ctl.dispatch(SessionEvent::FireRequested);
        assert!(ctl.world().projectiles.is_empty());

        for _ in 0..FADE_TICKS - 1 {
            ctl.dispatch(SessionEvent::Tick);
        }
        assert_eq!(ctl.state(), SessionState::GameOver);
        ctl.dispatch(SessionEvent::Tick);
        assert_eq!(ctl.state(), SessionState::Debrief);

        let cues = &ctl.presenter().cues;
        assert_eq!(&cues[cues.len() - 2..], &[Cue::MusicStop, Cue::EngineStop]);

        let report = ctl.debrief().unwrap();
        assert_eq!(report.outcome, Outcome::OxygenDepleted);

        ctl.dispatch(SessionEvent::ExitRequested);
        assert_eq!(ctl.state(), SessionState::Init);
        ctl.dispatch(SessionEvent::Tick);
        assert_eq!(ctl.world().resources.oxygen, START_OXYGEN);
        assert!(ctl.world().enemies.is_empty());
    }

    #[test]
    fn test_jump_doubles_score() {
        let mut ctl = running();
        {
            let world = ctl.engine_mut().world_mut();
            world.score = 300;
            world.ftl_armed = true;
            world.ftl_ready = true;
            world.ftl_countdown = 1;
        }

        ctl.dispatch(SessionEvent::Tick);
        assert_eq!(ctl.state(), SessionState::GameOver);
        assert_eq!(ctl.world().score, 600);
        assert_eq!(ctl.presenter().cues.last(), Some(&Cue::VoiceJump));

        for _ in 0..FADE_TICKS {
            ctl.dispatch(SessionEvent::Tick);
        }
        let report = ctl.debrief().unwrap();
        assert_eq!(report.outcome, Outcome::Jumped);
        assert_eq!(report.score, 600);
    }

    #[test]
    fn test_narrative_is_voiced_without_transition() {
        let mut ctl = running();
        let changes = ctl.presenter().transitions.len();
        ctl.engine_mut().world_mut().avatar.pos = Vec2::new(FTL_ARMED_RANGE + 50.0, 0.0);

        for _ in 0..5 {
            ctl.dispatch(SessionEvent::Tick);
        }
        assert_eq!(ctl.state(), SessionState::Running);
        assert_eq!(ctl.presenter().transitions.len(), changes);
        let voiced = ctl
            .presenter()
            .cues
            .iter()
            .filter(|c| **c == Cue::VoiceGoodHunting)
            .count();
        assert_eq!(voiced, 1);
    }

    #[test]
    fn test_fuel_empty_ends_session() {
        let mut ctl = running();
        ctl.engine_mut().world_mut().resources.fuel = FUEL_PER_TICK;
        ctl.dispatch(SessionEvent::PointerDown);
        ctl.dispatch(SessionEvent::Tick);
        assert_eq!(ctl.state(), SessionState::GameOver);
        assert!(!ctl.world().thrust_engaged);
    }

    #[test]
    fn test_unhandled_events_are_ignored() {
        let mut ctl = controller();
        ctl.dispatch(SessionEvent::PointerDown);
        ctl.dispatch(SessionEvent::ViewportResized {
            width: 10.0,
            height: 10.0,
        });
        ctl.dispatch(SessionEvent::Sim(SimEvent::JumpReady));
        assert_eq!(ctl.state(), SessionState::Init);
        assert!(ctl.presenter().transitions.is_empty());
        assert!(ctl.presenter().cues.is_empty());
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut ctl = controller();
        ctl.push(SessionEvent::Tick);
        ctl.push(SessionEvent::StartRequested);
        assert_eq!(ctl.pending(), 2);
        ctl.run_pending();
        assert_eq!(ctl.state(), SessionState::Running);
        assert_eq!(ctl.pending(), 0);

        // Start arriving before the reset tick is dropped
        let mut ctl = controller();
        ctl.push(SessionEvent::StartRequested);
        ctl.push(SessionEvent::Tick);
        ctl.run_pending();
        assert_eq!(ctl.state(), SessionState::Menu);
    }
}
