//! Explosion particles and the burst pool that owns them

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A short-lived fading spark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds lived so far
    pub lifetime: f32,
    pub max_lifetime: f32,
    active: bool,
}

impl Particle {
    /// Particle at `pos` with a random heading, speed and lifetime
    pub fn scattered(pos: Vec2, rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let speed = rng.random_range(PARTICLE_MIN_SPEED..=PARTICLE_MAX_SPEED);
        let max_lifetime = rng.random_range(PARTICLE_MIN_LIFETIME..=PARTICLE_MAX_LIFETIME);
        Self::new(pos, Vec2::from_angle(angle) * speed, max_lifetime)
    }

    pub fn new(pos: Vec2, vel: Vec2, max_lifetime: f32) -> Self {
        Self {
            pos,
            vel,
            lifetime: 0.0,
            max_lifetime,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 1 at birth, 0 at expiry
    pub fn alpha(&self) -> f32 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (1.0 - self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.lifetime += dt;
        if self.lifetime >= self.max_lifetime {
            self.active = false;
            return;
        }
        self.pos += self.vel * dt;
    }
}

/// Pool of live explosion particles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `count` particles at (x, y)
    pub fn create_explosion(&mut self, x: f32, y: f32, count: usize, rng: &mut impl Rng) {
        let origin = Vec2::new(x, y);
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::scattered(origin, rng));
        }
        log::debug!("Burst of {} particles at ({:.0}, {:.0})", count, x, y);
    }

    /// Age everything; expired particles go inactive but stay until [`Self::cleanup`]
    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.update(dt);
        }
    }

    /// Drop inactive particles
    pub fn cleanup(&mut self) {
        self.particles.retain(Particle::is_active);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_particle_fades_then_expires() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0);
        p.update(0.5);
        assert!(p.is_active());
        assert!((p.alpha() - 0.5).abs() < 1e-5);
        assert!((p.pos.x - 50.0).abs() < 1e-4);

        p.update(0.5);
        assert!(!p.is_active());
        assert_eq!(p.alpha(), 0.0);

        // Expired particles don't move
        let frozen = p.pos;
        p.update(0.5);
        assert_eq!(p.pos, frozen);
    }

    #[test]
    fn test_burst_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut pool = ParticlePool::new();
        pool.create_explosion(120.0, 80.0, 25, &mut rng);
        assert_eq!(pool.len(), 25);
        for p in pool.iter() {
            assert_eq!(p.pos, Vec2::new(120.0, 80.0));
            let speed = p.vel.length();
            assert!((PARTICLE_MIN_SPEED - 0.01..=PARTICLE_MAX_SPEED + 0.01).contains(&speed));
            assert!((PARTICLE_MIN_LIFETIME..=PARTICLE_MAX_LIFETIME).contains(&p.max_lifetime));
        }
    }

    #[test]
    fn test_cleanup_only_removes_expired() {
        let mut pool = ParticlePool::new();
        pool.push(Particle::new(Vec2::ZERO, Vec2::ZERO, 0.5));
        pool.push(Particle::new(Vec2::ZERO, Vec2::ZERO, 1.5));
        pool.update(0.6);
        // Still present until cleanup runs
        assert_eq!(pool.len(), 2);
        pool.cleanup();
        assert_eq!(pool.len(), 1);
        assert!(pool.iter().all(Particle::is_active));
    }

    proptest! {
        #[test]
        fn prop_alpha_in_unit_range(max_life in 0.5f32..1.5, steps in prop::collection::vec(0.0f32..0.1, 0..40)) {
            let mut p = Particle::new(Vec2::ZERO, Vec2::ONE, max_life);
            for dt in steps {
                p.update(dt);
                prop_assert!((0.0..=1.0).contains(&p.alpha()));
            }
        }
    }
}
