//! Space Shooter - A top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `platform`: Input model, frame clock and the frame loop
//! - `renderer`: Presentation seam (draw lists, asset handles, headless presenter)
//! - `settings`: Runtime configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical viewport size
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Target frame cadence
    pub const TARGET_FPS: u32 = 60;
    /// Largest delta a single tick may see (stalls are clamped to this)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.2;
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 500.0;
    pub const PLAYER_SIZE: (f32, f32) = (32.0, 32.0);
    /// Playfield clamp for the player's centre
    pub const PLAYER_MIN_X: f32 = 20.0;
    pub const PLAYER_MAX_X: f32 = 780.0;
    pub const PLAYER_MIN_Y: f32 = 20.0;
    pub const PLAYER_MAX_Y: f32 = 580.0;

    /// Hostile defaults
    pub const HOSTILE_BASE_SPEED: f32 = 100.0;
    pub const HOSTILE_SCORE_VALUE: u32 = 10;
    pub const HOSTILE_SIZE: (f32, f32) = (32.0, 32.0);
    pub const HOSTILE_SPAWN_Y: f32 = -30.0;
    pub const HOSTILE_SPAWN_MIN_X: f32 = 50.0;
    pub const HOSTILE_SPAWN_MAX_X: f32 = 750.0;
    /// Hostiles past this y are off-screen
    pub const HOSTILE_EXIT_Y: f32 = 650.0;
    /// Damage a hostile deals on contact with the player
    pub const HOSTILE_CONTACT_DAMAGE: i32 = 20;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 500.0;
    pub const PROJECTILE_SIZE: (f32, f32) = (8.0, 16.0);
    /// Projectiles spawn this far above the player's centre
    pub const PROJECTILE_MUZZLE_OFFSET: f32 = 20.0;
    /// Projectiles above this y are off-screen
    pub const PROJECTILE_EXIT_Y: f32 = -20.0;

    /// Particle bursts
    pub const PARTICLE_SIZE: (f32, f32) = (4.0, 4.0);
    pub const PARTICLE_MIN_SPEED: f32 = 50.0;
    pub const PARTICLE_MAX_SPEED: f32 = 200.0;
    pub const PARTICLE_MIN_LIFETIME: f32 = 0.5;
    pub const PARTICLE_MAX_LIFETIME: f32 = 1.5;
    pub const KILL_BURST_PARTICLES: usize = 25;
    pub const CONTACT_BURST_PARTICLES: usize = 15;

    /// Backdrop starfield
    pub const STAR_SIZE: (f32, f32) = (2.0, 2.0);
    pub const STAR_INITIAL_COUNT: usize = 100;
    pub const STAR_MAX_COUNT: usize = 150;
    pub const STAR_MIN_SPEED: f32 = 20.0;
    pub const STAR_MAX_SPEED: f32 = 100.0;
    pub const STAR_SPAWN_INTERVAL: f32 = 0.1;
    pub const STAR_SPAWN_Y: f32 = -10.0;
    pub const STAR_WRAP_Y: f32 = 620.0;
    pub const STAR_RESET_Y: f32 = -20.0;

    /// Spawn pacing
    pub const BASE_SPAWN_INTERVAL: f32 = 2.0;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.5;
}

/// Build a `Vec2` from a `(w, h)` size tuple
#[inline]
pub fn size_vec(size: (f32, f32)) -> Vec2 {
    Vec2::new(size.0, size.1)
}
