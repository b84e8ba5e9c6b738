//! Platform layer
//!
//! Handles the parts of the loop that aren't simulation:
//! - Input sampling (discrete events + held keys) behind [`InputSource`]
//! - Frame timing and the per-tick delta cap
//! - The `poll → tick → present` frame loop

pub mod autopilot;
pub mod scripted;

use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

pub use autopilot::Autopilot;
pub use scripted::ScriptedInput;

use crate::consts::MAX_FRAME_DT;
use crate::renderer::{Presenter, TextureStore, build_draw_list};
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Where a frame's input comes from
pub trait InputSource {
    /// Sample input for the next tick. Discrete events are consumed by this call.
    fn poll(&mut self, state: &GameState) -> TickInput;
}

/// Clamp a raw frame delta into `[0, min(max_dt, 0.1)]`
///
/// A NaN cap falls back to 0.1 and a negative one freezes the tick.
pub fn cap_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() {
        return 0.0;
    }
    let upper = if max_dt.is_nan() {
        MAX_FRAME_DT
    } else {
        max_dt.clamp(0.0, MAX_FRAME_DT)
    };
    dt.clamp(0.0, upper)
}

/// Frame pacing
#[derive(Debug, Clone)]
pub enum FrameClock {
    /// Sleep to the target cadence and report real elapsed time
    Realtime { frame: Duration, last: Instant },
    /// Constant step, no sleeping (headless / deterministic runs)
    Fixed(f32),
}

impl FrameClock {
    pub fn realtime(target_fps: u32) -> Self {
        Self::Realtime {
            frame: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    pub fn fixed(dt: f32) -> Self {
        Self::Fixed(dt)
    }

    /// Wait for the next frame and return the raw elapsed seconds
    pub fn next_frame(&mut self) -> f32 {
        match self {
            FrameClock::Realtime { frame, last } => {
                let elapsed = last.elapsed();
                if elapsed < *frame {
                    thread::sleep(*frame - elapsed);
                }
                let now = Instant::now();
                let dt = now.duration_since(*last).as_secs_f32();
                *last = now;
                dt
            }
            FrameClock::Fixed(dt) => *dt,
        }
    }
}

/// When the loop should stop on its own
#[derive(Debug, Clone, Copy)]
pub struct FrameLimits {
    pub max_frames: Option<u64>,
    /// Stop once this many games have ended
    pub max_games: Option<u32>,
    pub max_frame_dt: f32,
}

impl Default for FrameLimits {
    fn default() -> Self {
        Self {
            max_frames: None,
            max_games: None,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

/// What happened during a run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub frames: u64,
    pub simulated_secs: f32,
    pub games_played: u32,
    pub best_score: u32,
    pub exit_requested: bool,
}

/// Drive `poll → tick → present` until exit is requested or a limit is hit
pub fn run(
    state: &mut GameState,
    input: &mut impl InputSource,
    presenter: &mut impl Presenter,
    textures: &TextureStore,
    clock: &mut FrameClock,
    limits: &FrameLimits,
) -> RunSummary {
    let mut summary = RunSummary {
        seed: state.seed,
        ..Default::default()
    };
    let start_games = state.games_played;

    loop {
        if limits.max_frames.is_some_and(|max| summary.frames >= max) {
            break;
        }
        if limits
            .max_games
            .is_some_and(|max| state.games_played - start_games >= max)
        {
            break;
        }

        let dt = cap_dt(clock.next_frame(), limits.max_frame_dt);
        let frame_input = input.poll(state);
        tick(state, &frame_input, dt);

        if state.phase != GamePhase::Menu {
            summary.best_score = summary.best_score.max(state.score);
        }
        summary.frames += 1;
        summary.simulated_secs += dt;

        presenter.present(&build_draw_list(state, textures), dt);

        // Shutdown latency is bounded to the frame that saw the signal
        if state.exit_requested() {
            break;
        }
    }

    summary.games_played = state.games_played - start_games;
    summary.exit_requested = state.exit_requested();
    log::info!(
        "Run finished: {} frames, {:.1}s simulated, {} game(s), best score {}",
        summary.frames,
        summary.simulated_secs,
        summary.games_played,
        summary.best_score
    );
    summary
}
