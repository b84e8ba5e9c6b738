//! Headless presenter that reports frames through the `log` facade

use super::Presenter;
use super::draw::DrawList;
use crate::sim::GamePhase;

/// Logs phase changes immediately and the on-screen text at a fixed interval
#[derive(Debug, Clone)]
pub struct LogPresenter {
    /// Seconds between text reports
    interval: f32,
    elapsed: f32,
    last_phase: Option<GamePhase>,
    frames: u64,
}

impl LogPresenter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval: interval.max(0.0),
            elapsed: 0.0,
            last_phase: None,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for LogPresenter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &DrawList, dt: f32) {
        self.frames += 1;

        if self.last_phase != Some(frame.phase) {
            log::info!("Screen: {}", frame.phase.as_str());
            self.last_phase = Some(frame.phase);
            self.elapsed = 0.0;
            return;
        }

        self.elapsed += dt;
        if self.interval > 0.0 && self.elapsed >= self.interval {
            self.elapsed = 0.0;
            let text: Vec<&str> = frame.texts().collect();
            log::info!("[{} sprites] {}", frame.sprite_count(), text.join(" | "));
        }
    }
}
