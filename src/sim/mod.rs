//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (one `Pcg32` owned by the state)
//! - Entity pools are only compacted in the cleanup step, never mid-update
//! - No rendering or platform dependencies

pub mod backdrop;
pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod particles;
pub mod player;
pub mod state;
pub mod tick;

pub use backdrop::{Backdrop, Star};
pub use collision::{BurstRequest, CollisionReport, resolve_collisions};
pub use difficulty::{difficulty_for_score, spawn_interval_for};
pub use entity::{Aabb, Body, Entity, EntityKind, Hostile, Projectile};
pub use particles::{Particle, ParticlePool};
pub use player::{HeldKeys, Player};
pub use state::{GamePhase, GameState, HudText, MenuItem};
pub use tick::{InputEvent, TickInput, tick};
