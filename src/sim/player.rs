//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityKind};
use crate::consts::*;

/// Movement keys currently held down (continuous state, not events)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Velocity for these keys at `speed`, diagonals normalized
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let mut vel = Vec2::ZERO;
        if self.up {
            vel.y = -speed;
        }
        if self.down {
            vel.y = speed;
        }
        if self.left {
            vel.x = -speed;
        }
        if self.right {
            vel.x = speed;
        }
        if vel.x != 0.0 && vel.y != 0.0 {
            vel = vel.normalize() * speed;
        }
        vel
    }
}

/// Input-driven ship with health and a shot cooldown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    health: i32,
    pub max_health: i32,
    pub shoot_cooldown: f32,
    shoot_timer: f32,
    /// Keys sampled for the next update
    #[serde(skip)]
    held: HeldKeys,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y))
    }
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        let mut body = Body::new(pos, PLAYER_SIZE);
        body.speed = PLAYER_SPEED;
        Self {
            body,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            shoot_timer: 0.0,
            held: HeldKeys::default(),
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage, never dropping below zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).clamp(0, self.max_health);
    }

    /// Overwrite health (clamped into range); mostly for scenario setup
    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(0, self.max_health);
    }

    pub fn shoot_timer(&self) -> f32 {
        self.shoot_timer
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_timer <= 0.0
    }

    pub fn reset_shoot_timer(&mut self) {
        self.shoot_timer = self.shoot_cooldown;
    }

    /// Latch held movement keys for the next update
    pub fn set_held(&mut self, held: HeldKeys) {
        self.held = held;
    }

    /// Where a fired projectile starts
    pub fn muzzle(&self) -> Vec2 {
        self.body.pos - Vec2::new(0.0, PROJECTILE_MUZZLE_OFFSET)
    }
}

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.body.vel = self.held.velocity(self.body.speed);

        if self.shoot_timer > 0.0 {
            self.shoot_timer = (self.shoot_timer - dt).max(0.0);
        }

        self.body.integrate(dt);

        let pos = &mut self.body.pos;
        pos.x = pos.x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        pos.y = pos.y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);
    }
}
