//! Shared entity record and the velocity-only entities
//!
//! Player, hostiles and projectiles all carry a [`Body`]: position, velocity,
//! speed, active flag and sprite size. The [`Entity`] trait gives them a common
//! update/bounds surface without a class hierarchy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::size_vec;

/// Axis-aligned bounding box (min corner inclusive, max corner exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box of `size` centred on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap on both axes. Boxes that only share an edge don't intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Which concrete entity a body belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Hostile,
    Projectile,
}

/// Common movable record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
    /// Once false, never set back to true
    active: bool,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: (f32, f32)) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            speed: 0.0,
            active: true,
            size: size_vec(size),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Terminal: an entity can't be brought back once deactivated
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Linear integration
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size)
    }
}

/// Capability shared by player, hostiles and projectiles
pub trait Entity {
    fn kind(&self) -> EntityKind;
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;
    fn update(&mut self, dt: f32);

    fn pos(&self) -> Vec2 {
        self.body().pos
    }

    fn is_active(&self) -> bool {
        self.body().is_active()
    }

    fn deactivate(&mut self) {
        self.body_mut().deactivate();
    }

    fn bounds(&self) -> Aabb {
        self.body().bounds()
    }
}

/// A descending enemy ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub body: Body,
    pub score_value: u32,
}

impl Hostile {
    /// `speed_multiplier` is the difficulty at spawn time
    pub fn new(x: f32, y: f32, speed_multiplier: f32) -> Self {
        let mut body = Body::new(Vec2::new(x, y), HOSTILE_SIZE);
        body.speed = HOSTILE_BASE_SPEED * speed_multiplier;
        body.vel = Vec2::new(0.0, body.speed);
        Self {
            body,
            score_value: HOSTILE_SCORE_VALUE,
        }
    }
}

impl Entity for Hostile {
    fn kind(&self) -> EntityKind {
        EntityKind::Hostile
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        if !self.body.is_active() {
            return;
        }
        self.body.integrate(dt);
        if self.body.pos.y > HOSTILE_EXIT_Y {
            self.body.deactivate();
        }
    }
}

/// A player shot travelling straight up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
}

impl Projectile {
    pub fn new(x: f32, y: f32) -> Self {
        let mut body = Body::new(Vec2::new(x, y), PROJECTILE_SIZE);
        body.speed = PROJECTILE_SPEED;
        body.vel = Vec2::new(0.0, -body.speed);
        Self { body }
    }
}

impl Entity for Projectile {
    fn kind(&self) -> EntityKind {
        EntityKind::Projectile
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        if !self.body.is_active() {
            return;
        }
        self.body.integrate(dt);
        if self.body.pos.y < PROJECTILE_EXIT_Y {
            self.body.deactivate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap_and_touching() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_center(Vec2::new(9.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn test_hostile_descends_at_scaled_speed() {
        let mut hostile = Hostile::new(400.0, -30.0, 1.5);
        assert_eq!(hostile.body.vel, Vec2::new(0.0, 150.0));
        hostile.update(0.1);
        assert!((hostile.pos().y - (-15.0)).abs() < 1e-4);
        assert_eq!(hostile.score_value, 10);
    }

    #[test]
    fn test_hostile_leaves_bottom_edge() {
        let mut hostile = Hostile::new(400.0, 645.0, 1.0);
        hostile.update(0.01);
        assert!(hostile.is_active(), "y=646 is still inside the exit margin");
        hostile.update(0.1);
        assert!(!hostile.is_active());
    }

    #[test]
    fn test_projectile_leaves_top_edge() {
        // 500 px/s * 0.01 s = 5 px: -20 -> -25
        let mut shot = Projectile::new(100.0, -20.0);
        shot.update(0.01);
        assert!(shot.pos().y < -20.0);
        assert!(!shot.is_active());
    }

    #[test]
    fn test_inactive_entity_is_frozen() {
        let mut shot = Projectile::new(100.0, 300.0);
        shot.deactivate();
        shot.update(1.0);
        assert_eq!(shot.pos(), Vec2::new(100.0, 300.0));
        assert!(!shot.is_active());
    }

    #[test]
    fn test_bounds_are_centered() {
        let shot = Projectile::new(100.0, 200.0);
        let b = shot.bounds();
        assert_eq!(b.min, Vec2::new(96.0, 192.0));
        assert_eq!(b.size(), Vec2::new(8.0, 16.0));
    }
}
