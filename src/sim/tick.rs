//! Per-frame simulation tick
//!
//! Discrete input events are consumed first, then (while playing) the pools are
//! advanced in a fixed order: backdrop, player, projectiles/hostiles, particles,
//! spawning, collisions, cleanup, derived stats.

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::entity::Entity;
use super::player::HeldKeys;
use super::state::{GamePhase, GameState, MenuItem};

/// One-shot key presses delivered this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    Up,
    Down,
    Confirm,
    Fire,
    /// Window close / quit signal
    Close,
}

/// Input for a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Discrete presses, in arrival order
    pub events: Vec<InputEvent>,
    /// Movement keys currently held
    pub held: HeldKeys,
}

impl TickInput {
    pub fn with_events(events: &[InputEvent]) -> Self {
        Self {
            events: events.to_vec(),
            ..Default::default()
        }
    }

    pub fn held(held: HeldKeys) -> Self {
        Self {
            events: Vec::new(),
            held,
        }
    }
}

/// Advance the game by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    for &event in &input.events {
        handle_event(state, event);
    }

    if state.phase == GamePhase::Playing {
        update_playing(state, input.held, dt);
    }
}

/// Apply one discrete event against the current phase
fn handle_event(state: &mut GameState, event: InputEvent) {
    if event == InputEvent::Close {
        state.request_exit();
        return;
    }

    match state.phase {
        GamePhase::Menu => match event {
            InputEvent::Up => state.menu_selection = MenuItem::Start,
            InputEvent::Down => state.menu_selection = MenuItem::Exit,
            InputEvent::Confirm => match state.menu_selection {
                MenuItem::Start => state.start_game(),
                MenuItem::Exit => state.request_exit(),
            },
            _ => {}
        },
        GamePhase::Playing => {
            if event == InputEvent::Fire {
                state.try_fire();
            }
        }
        GamePhase::GameOver => {
            if event == InputEvent::Confirm {
                state.return_to_menu();
            }
        }
    }
}

fn update_playing(state: &mut GameState, held: HeldKeys, dt: f32) {
    state.play_time += dt;

    // 1. Starfield
    state.backdrop.update(dt, &mut state.rng);

    // 2. Player
    if let Some(player) = state.player.as_mut() {
        player.set_held(held);
        player.update(dt);
        if !player.is_alive() {
            state.game_over_pending = true;
        }
    }

    // 3. Projectiles and hostiles
    for projectile in &mut state.projectiles {
        projectile.update(dt);
    }
    for hostile in &mut state.hostiles {
        hostile.update(dt);
    }

    // 4. Particles
    state.particles.update(dt);

    // 5. Spawning
    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval {
        state.spawn_hostile();
        state.spawn_timer = 0.0;
    }

    // 6. Collisions
    if let Some(player) = state.player.as_mut() {
        let report = resolve_collisions(&mut state.projectiles, &mut state.hostiles, player);
        if !player.is_alive() {
            state.game_over_pending = true;
        }

        state.score += report.score_gained;
        for burst in &report.bursts {
            state
                .particles
                .create_explosion(burst.pos.x, burst.pos.y, burst.count, &mut state.rng);
        }
        if report.player_hits > 0 {
            log::debug!(
                "Player hit {} time(s), health {}",
                report.player_hits,
                player.health()
            );
        }
    }

    // 7. Cleanup
    state.cleanup();

    // 8-9. Derived stats and display text
    state.update_difficulty();
    state.refresh_hud();

    if state.game_over_pending {
        state.game_over();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::entity::{Hostile, Projectile};
    use glam::Vec2;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &TickInput::with_events(&[InputEvent::Confirm]), 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    #[test]
    fn test_menu_navigation_and_start() {
        let mut state = GameState::new(12345);

        tick(&mut state, &TickInput::with_events(&[InputEvent::Down]), 0.016);
        assert_eq!(state.menu_selection, MenuItem::Exit);
        tick(&mut state, &TickInput::with_events(&[InputEvent::Up]), 0.016);
        assert_eq!(state.menu_selection, MenuItem::Start);

        // Fire does nothing on the menu
        tick(&mut state, &TickInput::with_events(&[InputEvent::Fire]), 0.016);
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &TickInput::with_events(&[InputEvent::Confirm]), 0.016);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.player.is_some());
    }

    #[test]
    fn test_menu_exit() {
        let mut state = GameState::new(1);
        tick(
            &mut state,
            &TickInput::with_events(&[InputEvent::Down, InputEvent::Confirm]),
            0.016,
        );
        assert!(state.exit_requested());
        assert_eq!(state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_close_from_any_phase() {
        let mut state = playing_state(2);
        tick(&mut state, &TickInput::with_events(&[InputEvent::Close]), 0.016);
        assert!(state.exit_requested());
    }

    #[test]
    fn test_pools_frozen_outside_playing() {
        let mut state = GameState::new(3);
        let before: Vec<f32> = state.backdrop.iter().map(|s| s.pos.y).collect();
        tick(&mut state, &TickInput::default(), 0.1);
        let after: Vec<f32> = state.backdrop.iter().map(|s| s.pos.y).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_hostile_descends_without_reaching_player() {
        let mut state = playing_state(4);
        state.hostiles.push(Hostile::new(400.0, -30.0, 1.0));

        // 0.53 s of simulated time: 5 ticks of 0.1 and one of 0.03
        for _ in 0..5 {
            tick(&mut state, &TickInput::default(), 0.1);
        }
        tick(&mut state, &TickInput::default(), 0.03);

        let hostile = &state.hostiles[0];
        assert!((hostile.pos().y - 23.0).abs() < 1e-3);
        assert!(hostile.is_active());
        assert_eq!(state.player.as_ref().map(|p| p.health()), Some(100));
    }

    #[test]
    fn test_hostile_rams_player_after_five_seconds() {
        let mut state = playing_state(4);
        state.hostiles.push(Hostile::new(400.0, -30.0, 1.0));

        for _ in 0..53 {
            tick(&mut state, &TickInput::default(), 0.1);
        }

        // Our hostile hit the stationary player and was removed; later spawns
        // are still far above.
        assert!(state.hostiles.iter().all(|h| h.pos().y < 400.0));
        assert_eq!(state.player.as_ref().map(|p| p.health()), Some(80));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_projectile_offscreen_removed() {
        let mut state = playing_state(5);
        state.projectiles.push(Projectile::new(100.0, -15.0));

        // 500 px/s * 0.02 s: -15 -> -25
        tick(&mut state, &TickInput::default(), 0.02);

        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_kill_scores_and_bursts() {
        let mut state = playing_state(6);
        state.projectiles.push(Projectile::new(200.0, 200.0));
        state.hostiles.push(Hostile::new(200.0, 190.0, 1.0));

        tick(&mut state, &TickInput::default(), 0.001);

        assert_eq!(state.score, 10);
        assert!(state.projectiles.is_empty());
        assert!(state.hostiles.is_empty());
        assert_eq!(state.particles.len(), KILL_BURST_PARTICLES);
        assert_eq!(state.hud.score, "Score: 10");
        assert!((state.difficulty - 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_double_ram_ends_game_same_tick() {
        let mut state = playing_state(7);
        if let Some(player) = state.player.as_mut() {
            player.set_health(15);
        }
        state.hostiles.push(Hostile::new(395.0, 495.0, 1.0));
        state.hostiles.push(Hostile::new(405.0, 505.0, 1.0));

        tick(&mut state, &TickInput::default(), 0.001);

        let player = state.player.as_ref().map(|p| (p.health(), p.is_alive()));
        assert_eq!(player, Some((0, false)));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.particles.len(), 2 * CONTACT_BURST_PARTICLES);
        assert_eq!(state.games_played, 1);
    }

    #[test]
    fn test_game_over_only_confirm_returns_to_menu() {
        let mut state = playing_state(8);
        if let Some(player) = state.player.as_mut() {
            player.set_health(10);
        }
        state.hostiles.push(Hostile::new(400.0, 500.0, 1.0));
        tick(&mut state, &TickInput::default(), 0.001);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Nothing else gets out of game over
        for event in [InputEvent::Up, InputEvent::Down, InputEvent::Fire] {
            tick(&mut state, &TickInput::with_events(&[event]), 0.016);
            assert_eq!(state.phase, GamePhase::GameOver);
        }

        tick(&mut state, &TickInput::with_events(&[InputEvent::Confirm]), 0.016);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.player.is_none());
        assert!(state.particles.is_empty());
        assert_eq!(state.menu_selection, MenuItem::Start);
    }

    #[test]
    fn test_spawn_timer_cycle() {
        let mut state = playing_state(9);
        // Quarter-second steps sum exactly to the 2 s interval
        for _ in 0..7 {
            tick(&mut state, &TickInput::default(), 0.25);
        }
        assert!(state.hostiles.is_empty());
        tick(&mut state, &TickInput::default(), 0.25);
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn test_fire_then_move() {
        let mut state = playing_state(10);
        let input = TickInput {
            events: vec![InputEvent::Fire],
            held: HeldKeys {
                left: true,
                ..Default::default()
            },
        };
        tick(&mut state, &input, 0.1);

        assert_eq!(state.projectiles.len(), 1);
        // Shot left from the old position, then advanced one tick
        assert_eq!(state.projectiles[0].pos(), Vec2::new(400.0, 430.0));
        let pos = state.player.as_ref().map(|p| p.pos());
        assert_eq!(pos, Some(Vec2::new(370.0, 500.0)));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing_state(99999);
        let mut state2 = playing_state(99999);

        let inputs = [
            TickInput::with_events(&[InputEvent::Fire]),
            TickInput::held(HeldKeys {
                right: true,
                ..Default::default()
            }),
            TickInput::default(),
        ];

        for step in 0..300 {
            let input = &inputs[step % inputs.len()];
            tick(&mut state1, input, 1.0 / 60.0);
            tick(&mut state2, input, 1.0 / 60.0);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.hostiles.len(), state2.hostiles.len());
        assert_eq!(state1.particles.len(), state2.particles.len());
        for (a, b) in state1.hostiles.iter().zip(&state2.hostiles) {
            assert_eq!(a.pos(), b.pos());
        }
    }
}
