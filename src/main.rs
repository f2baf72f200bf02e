//! Penalty Shootout entry point
//!
//! Headless native demo: opens the modal, lets a seeded autoplayer swipe at
//! the ball, and logs each outcome. Run with `RUST_LOG=info` to see the shots.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use penalty_shootout::sim::{GameEvent, Outcome};
use penalty_shootout::{Language, PenaltySession, Settings, Tuning};

/// Penalty Shootout - headless autoplayer demo
#[derive(Parser, Debug)]
#[command(name = "penalty-shootout")]
#[command(version, about, long_about = None)]
struct Args {
    /// Balance constants as JSON (default: built-in tuning)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Player preferences as JSON (default: built-in settings)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Message language override: en or he
    #[arg(short, long)]
    language: Option<String>,

    /// Shots the autoplayer takes before closing the modal
    #[arg(short = 'n', long, default_value = "12")]
    shots: u32,

    /// Autoplayer RNG seed
    #[arg(short, long, default_value_t = 0x5eed_90a1)]
    seed: u64,
}

/// Simulated display refresh (seconds per frame)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Phone-sized viewport
const VIEWPORT: Vec2 = Vec2::new(390.0, 844.0);

fn load_tuning(path: Option<&Path>) -> Result<Tuning, String> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let tuning = Tuning::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    log::info!("Loaded tuning from {}", path.display());
    Ok(tuning)
}

fn load_settings(path: Option<&Path>, language: Option<&str>) -> Settings {
    let mut settings = match path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(json) => Settings::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Cannot read {} ({e}), using default settings", path.display());
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    if let Some(code) = language {
        match Language::from_str(code) {
            Some(language) => settings.language = language,
            None => log::warn!("Unknown language '{code}', keeping {:?}", settings.language),
        }
    }
    settings
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Penalty Shootout (native demo) starting...");

    let tuning = match load_tuning(args.tuning.as_deref()) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::error!("Invalid tuning: {e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = load_settings(args.settings.as_deref(), args.language.as_deref());

    let mut session = PenaltySession::new(VIEWPORT, settings, tuning, || {
        log::info!("Host notified: game closed")
    });
    session.set_visible(true);

    let mut rng = Pcg32::seed_from_u64(args.seed);
    let mut resolved = 0;
    let mut waiting = false;
    // Plenty of frames for every shot plus its reset pause
    let max_frames = args.shots.saturating_mul(240);

    for _ in 0..max_frames {
        if resolved >= args.shots {
            break;
        }

        let ready = session
            .game()
            .is_some_and(|g| g.is_idle() && g.gesture.is_armed());
        if ready && !waiting {
            let Some(start) = session.game().map(|g| g.layout.ball_start) else {
                break;
            };
            // Press somewhere on the ball, swipe mostly upward
            let press = start + Vec2::new(rng.random_range(0.0..46.0), rng.random_range(0.0..46.0));
            let swipe = Vec2::new(rng.random_range(-180.0..180.0), rng.random_range(-320.0..-4.0));
            session.pointer_down(press.x, press.y);
            session.pointer_up(press.x + swipe.x, press.y + swipe.y);
            waiting = true;
        }

        for event in session.advance(FRAME_DT) {
            match event {
                GameEvent::ShotTaken(plan) => {
                    log::info!(
                        "Autoplayer shoots: power={:.2} target_x={:.1}",
                        plan.power,
                        plan.target_x
                    );
                }
                GameEvent::ShotRejected(reason) => {
                    log::info!("Autoplayer swipe rejected: {:?}", reason);
                    waiting = false;
                }
                GameEvent::ShotResolved { outcome, .. } => {
                    resolved += 1;
                    let label = match outcome {
                        Outcome::Goal => "GOAL",
                        Outcome::Save => "SAVE",
                        Outcome::Miss => "MISS",
                    };
                    let text = session.game().map(|g| g.message_text()).unwrap_or_default();
                    log::info!("Shot {resolved}: {label} ({text})");
                }
                GameEvent::BallReset => waiting = false,
                GameEvent::FlightLanded { .. } => {}
            }
        }
    }

    let board = session.scoreboard().unwrap_or_default();
    session.close();

    match serde_json::to_string(&board) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Could not serialize scoreboard: {e}");
            ExitCode::FAILURE
        }
    }
}
