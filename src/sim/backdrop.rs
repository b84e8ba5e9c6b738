//! Scrolling starfield behind the playfield
//!
//! Purely decorative. Stars never deactivate: they wrap back to the top when
//! they scroll off the bottom, and the field tops itself up to a fixed cap.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single background star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Downward scroll speed (px/s)
    pub speed: f32,
    /// Grey level for tinting (100-255)
    pub brightness: u8,
}

impl Star {
    fn random(y: Option<f32>, rng: &mut impl Rng) -> Self {
        let x = rng.random_range(0.0..=VIEWPORT_WIDTH);
        let y = y.unwrap_or_else(|| rng.random_range(0.0..=VIEWPORT_HEIGHT));
        Self {
            pos: Vec2::new(x, y),
            speed: rng.random_range(STAR_MIN_SPEED..=STAR_MAX_SPEED),
            brightness: rng.random_range(100..=255),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.y += self.speed * dt;
        if self.pos.y > STAR_WRAP_Y {
            self.pos.y = STAR_RESET_Y;
        }
    }
}

/// Self-regenerating star pool, population kept within [100, 150]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backdrop {
    stars: Vec<Star>,
    spawn_timer: f32,
    spawn_interval: f32,
}

impl Backdrop {
    /// Field with the initial stars scattered across the viewport
    pub fn new(rng: &mut impl Rng) -> Self {
        let stars = (0..STAR_INITIAL_COUNT)
            .map(|_| Star::random(None, rng))
            .collect();
        Self {
            stars,
            spawn_timer: 0.0,
            spawn_interval: STAR_SPAWN_INTERVAL,
        }
    }

    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.update(dt);
        }

        self.spawn_timer += dt;
        if self.spawn_timer >= self.spawn_interval && self.stars.len() < STAR_MAX_COUNT {
            self.stars.push(Star::random(Some(STAR_SPAWN_Y), rng));
            self.spawn_timer = 0.0;
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }
}
