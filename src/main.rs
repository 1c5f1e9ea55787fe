//! Operation: Star Fighter headless runner
//!
//! Drives one session with the demo autopilot from a fixed-rate scheduler and
//! logs what a real presenter would draw and play.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use star_fighter::audio::Cue;
use star_fighter::autopilot::Autopilot;
use star_fighter::session::{Presenter, SessionController, SessionEvent};
use star_fighter::settings::Settings;
use star_fighter::sim::{SessionState, SimulationEngine, WorldState};

/// Presenter that writes screens, HUD lines and cues to the log
struct LogPresenter {
    settings: Settings,
    frames: u64,
}

impl Presenter for LogPresenter {
    fn viewport(&self) -> (f32, f32) {
        (self.settings.viewport_width, self.settings.viewport_height)
    }

    fn state_changed(&mut self, _from: SessionState, to: SessionState, world: &WorldState) {
        match to {
            SessionState::Menu => log::info!("== Operation: Star Fighter =="),
            SessionState::Running => log::info!(
                "Mission start: {} hostiles, {} stars",
                world.enemies.len(),
                world.stars.len()
            ),
            SessionState::Debrief => {
                let report = star_fighter::Debrief::from_world(world);
                log::info!(
                    "Debrief: {} | score {} | kills {} | {} ticks",
                    report.outcome.headline(),
                    report.score,
                    report.kills,
                    report.ticks
                );
            }
            _ => {}
        }
    }

    fn frame(&mut self, world: &WorldState) {
        self.frames += 1;
        if self.frames % 60 != 0 {
            return;
        }
        if world.session_state == SessionState::GameOver {
            log::debug!("fade {:.2}", world.fade_opacity());
            return;
        }
        let ftl = if world.ftl_ready {
            format!(" | FTL jump in {}s", world.ftl_seconds_remaining())
        } else {
            String::new()
        };
        log::info!(
            "Score: {} | Fuel: {:.0} | O2: {:.0} | Ammo: {} | Shields: {} | pos ({:.0},{:.0}){}",
            world.score,
            world.resources.fuel,
            world.resources.oxygen,
            world.resources.ammo,
            world.resources.shields,
            world.avatar.pos.x,
            world.avatar.pos.y,
            ftl
        );
    }

    fn cue(&mut self, cue: Cue) {
        let volume = self.settings.cue_volume(cue);
        if cue.is_stop() {
            log::debug!("stop {}", cue.asset_id());
        } else {
            log::debug!("play {} @ {:.2}", cue.asset_id(), volume);
        }
    }
}

/// Run one autopiloted session headlessly.
#[derive(Parser, Debug)]
#[command(author, version, about = "Operation: Star Fighter headless runner", long_about = None)]
struct Args {
    /// JSON settings file.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
    /// RNG seed (overrides the settings file).
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many scheduler ticks.
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,
    /// Sleep the tick interval between ticks.
    #[arg(long)]
    realtime: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut settings = Settings::load(args.settings.as_deref());
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    let seed = settings.seed_or_clock();
    let interval = settings.tick_interval();
    log::info!("Seed {}, tick every {:?}", seed, interval);

    let presenter = LogPresenter {
        settings,
        frames: 0,
    };
    let mut session = SessionController::new(SimulationEngine::new(seed), presenter);
    let mut pilot = Autopilot::new();

    // Reset tick, then press "Start Mission"
    session.dispatch(SessionEvent::Tick);
    session.dispatch(SessionEvent::StartRequested);

    let started = Instant::now();
    let mut next_tick = started;
    let mut ticks = 0u64;

    while session.state() != SessionState::Debrief && ticks < args.max_ticks {
        if args.realtime {
            let now = Instant::now();
            if now < next_tick {
                std::thread::sleep(next_tick - now);
            }
            next_tick += interval;
        }

        if session.state() == SessionState::Running {
            for event in pilot.plan(session.world()) {
                session.push(event);
            }
        }
        session.push(SessionEvent::Tick);
        session.run_pending();
        ticks += 1;
    }

    if session.debrief().is_none() {
        log::warn!("Stopped after {} ticks in {}", ticks, session.state().as_str());
    }

    session.dispatch(SessionEvent::ExitRequested);
    log::info!(
        "Ran {} ticks in {:.2?}, {} frames presented",
        ticks,
        started.elapsed(),
        session.presenter().frames
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["star-fighter"]).unwrap();
        assert_eq!(args.settings, None);
        assert_eq!(args.seed, None);
        assert_eq!(args.max_ticks, 20_000);
        assert!(!args.realtime);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "star-fighter",
            "--settings",
            "cfg.json",
            "--seed",
            "42",
            "--max-ticks",
            "500",
            "--realtime",
        ])
        .unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.max_ticks, 500);
        assert!(args.realtime);
    }

    #[test]
    fn test_bad_numbers_are_rejected() {
        assert!(Args::try_parse_from(["star-fighter", "--seed", "abc"]).is_err());
        assert!(Args::try_parse_from(["star-fighter", "--max-ticks", "zz"]).is_err());
        assert!(Args::try_parse_from(["star-fighter", "--bogus"]).is_err());
    }
}
