//! Space Shooter entry point
//!
//! Headless native runner: the autopilot plays through the menu and games while
//! the log presenter reports what would be on screen.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;

use space_shooter::Settings;
use space_shooter::platform::{self, Autopilot, FrameClock, FrameLimits};
use space_shooter::renderer::{LogPresenter, TextureStore};
use space_shooter::sim::GameState;

#[derive(Parser, Debug)]
#[command(name = "space-shooter", version, about = "Top-down arcade shooter (headless runner)")]
struct Cli {
    /// JSON settings file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(long, default_value_t = 60 * 60 * 5)]
    frames: u64,

    /// Stop after this many games have ended
    #[arg(long)]
    games: Option<u32>,

    /// Pace frames against the wall clock
    #[arg(long)]
    realtime: bool,

    /// Debug-level logging (RUST_LOG still wins when set)
    #[arg(short, long)]
    verbose: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    summary_json: bool,
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings file {}", path.display()))?;
            let settings = Settings::from_json(&json)
                .with_context(|| format!("parsing settings file {}", path.display()))?;
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if cli.realtime {
        settings.realtime = true;
    }
    Ok(settings)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings = load_settings(&cli)?;
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Space Shooter (native) starting with seed {}", seed);

    let textures = TextureStore::with_builtin();
    let mut state = GameState::new(seed);
    let mut input = Autopilot::default();
    let mut presenter = LogPresenter::new(settings.hud_log_interval);
    let mut clock = if settings.realtime {
        FrameClock::realtime(settings.target_fps)
    } else {
        FrameClock::fixed(settings.frame_dt())
    };
    let limits = FrameLimits {
        max_frames: Some(cli.frames),
        max_games: cli.games,
        max_frame_dt: settings.max_frame_dt,
    };

    let summary = platform::run(
        &mut state,
        &mut input,
        &mut presenter,
        &textures,
        &mut clock,
        &limits,
    );

    if cli.summary_json {
        let json = serde_json::to_string_pretty(&summary).context("encoding run summary")?;
        println!("{}", json);
    }

    Ok(())
}
