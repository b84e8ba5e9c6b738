//! Collision detection and response
//!
//! Two independent pairwise passes over active entities using axis-aligned
//! bounding boxes. Neither pass spawns anything directly: explosion requests are
//! collected into the report and emitted by the caller afterwards.

use glam::Vec2;

use super::entity::{Entity, Hostile, Projectile};
use super::player::Player;
use crate::consts::{CONTACT_BURST_PARTICLES, HOSTILE_CONTACT_DAMAGE, KILL_BURST_PARTICLES};

/// A requested explosion effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstRequest {
    pub pos: Vec2,
    pub count: usize,
}

/// Outcome of one collision pass
#[derive(Debug, Clone, Default)]
pub struct CollisionReport {
    /// Points earned from destroyed hostiles
    pub score_gained: u32,
    /// Hostiles shot down
    pub kills: u32,
    /// Hostiles that rammed the player
    pub player_hits: u32,
    pub bursts: Vec<BurstRequest>,
}

/// Projectile × hostile pass.
///
/// Each projectile is consumed by at most one hostile. When a projectile overlaps
/// several, the first one in `hostiles` order wins.
pub fn resolve_projectile_hits(
    projectiles: &mut [Projectile],
    hostiles: &mut [Hostile],
    report: &mut CollisionReport,
) {
    for projectile in projectiles.iter_mut() {
        if !projectile.is_active() {
            continue;
        }
        let shot_bounds = projectile.bounds();

        for hostile in hostiles.iter_mut() {
            if !hostile.is_active() || !shot_bounds.intersects(&hostile.bounds()) {
                continue;
            }
            projectile.deactivate();
            hostile.deactivate();

            report.score_gained += hostile.score_value;
            report.kills += 1;
            report.bursts.push(BurstRequest {
                pos: hostile.pos(),
                count: KILL_BURST_PARTICLES,
            });
            break;
        }
    }
}

/// Hostile × player pass. Every overlapping hostile deals its damage.
pub fn resolve_player_hits(
    hostiles: &mut [Hostile],
    player: &mut Player,
    report: &mut CollisionReport,
) {
    let player_bounds = player.bounds();

    for hostile in hostiles.iter_mut() {
        if !hostile.is_active() || !player_bounds.intersects(&hostile.bounds()) {
            continue;
        }
        hostile.deactivate();
        player.take_damage(HOSTILE_CONTACT_DAMAGE);

        report.player_hits += 1;
        report.bursts.push(BurstRequest {
            pos: hostile.pos(),
            count: CONTACT_BURST_PARTICLES,
        });
    }
}

/// Run both passes in order
pub fn resolve_collisions(
    projectiles: &mut [Projectile],
    hostiles: &mut [Hostile],
    player: &mut Player,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    resolve_projectile_hits(projectiles, hostiles, &mut report);
    resolve_player_hits(hostiles, player, &mut report);
    report
}
