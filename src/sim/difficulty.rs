//! Score-driven difficulty curve

use crate::consts::{BASE_SPAWN_INTERVAL, MIN_SPAWN_INTERVAL};

/// Difficulty multiplier for a score: +0.5 per 100 points
pub fn difficulty_for_score(score: u32) -> f32 {
    1.0 + (score as f32 / 100.0) * 0.5
}

/// Seconds between hostile spawns at a difficulty, floored at 0.5
pub fn spawn_interval_for(difficulty: f32) -> f32 {
    (BASE_SPAWN_INTERVAL / difficulty).max(MIN_SPAWN_INTERVAL)
}
