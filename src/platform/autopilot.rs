//! Demo pilot that plays the game on its own
//!
//! Starts a game from the menu, lines up under the lowest hostile that is still
//! above the ship, sidesteps hostiles about to ram it, fires whenever the
//! cooldown allows, and goes back to the menu a moment after game over.

use super::InputSource;
use crate::sim::{Entity, GamePhase, GameState, HeldKeys, InputEvent, Player, TickInput};

/// Horizontal slack before the pilot bothers moving
const AIM_DEADZONE: f32 = 4.0;
/// Hostiles within this column half-width are worth a shot
const FIRE_WINDOW: f32 = 24.0;
/// Hostiles closer than this above the ship are dodged rather than chased
const DANGER_RANGE: f32 = 140.0;
/// Column half-width counted as "on a collision course"
const DANGER_WIDTH: f32 = 40.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Frames to linger on the game over screen before confirming
    pub game_over_frames: u32,
    waited: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(90)
    }
}

impl Autopilot {
    pub fn new(game_over_frames: u32) -> Self {
        Self {
            game_over_frames,
            waited: 0,
        }
    }

    fn steer(&self, state: &GameState, player: &Player) -> TickInput {
        let ship = player.pos();
        let active = state.hostiles.iter().filter(|h| h.is_active());

        // Nearest hostile bearing down on us, if any
        let threat = active
            .clone()
            .filter(|h| {
                let dy = ship.y - h.pos().y;
                dy > -DANGER_WIDTH && dy < DANGER_RANGE && (h.pos().x - ship.x).abs() < DANGER_WIDTH
            })
            .max_by(|a, b| a.pos().y.total_cmp(&b.pos().y));

        // Otherwise chase the lowest hostile still above the danger band
        let target = active
            .filter(|h| ship.y - h.pos().y >= DANGER_RANGE)
            .max_by(|a, b| a.pos().y.total_cmp(&b.pos().y));

        let mut held = HeldKeys::default();
        if let Some(threat) = threat {
            // Step away from the threat, preferring the roomier side
            let go_left = if (threat.pos().x - ship.x).abs() < AIM_DEADZONE {
                ship.x > crate::consts::VIEWPORT_WIDTH / 2.0
            } else {
                threat.pos().x > ship.x
            };
            held.left = go_left;
            held.right = !go_left;
        } else if let Some(target) = target {
            let dx = target.pos().x - ship.x;
            held.left = dx < -AIM_DEADZONE;
            held.right = dx > AIM_DEADZONE;
        }

        let lined_up = state
            .hostiles
            .iter()
            .any(|h| h.is_active() && h.pos().y < ship.y && (h.pos().x - ship.x).abs() < FIRE_WINDOW);

        let mut input = TickInput::held(held);
        if lined_up && player.can_shoot() {
            input.events.push(InputEvent::Fire);
        }
        input
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::Menu => {
                self.waited = 0;
                TickInput::with_events(&[InputEvent::Up, InputEvent::Confirm])
            }
            GamePhase::Playing => match state.player.as_ref() {
                Some(player) => self.steer(state, player),
                None => TickInput::default(),
            },
            GamePhase::GameOver => {
                self.waited += 1;
                if self.waited >= self.game_over_frames {
                    self.waited = 0;
                    TickInput::with_events(&[InputEvent::Confirm])
                } else {
                    TickInput::default()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Hostile;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.start_game();
        state
    }

    #[test]
    fn test_starts_game_from_menu() {
        let state = GameState::new(0);
        let input = Autopilot::default().poll(&state);
        assert_eq!(input.events, vec![InputEvent::Up, InputEvent::Confirm]);
    }

    #[test]
    fn test_chases_and_fires() {
        let mut state = playing(1);
        state.hostiles.push(Hostile::new(410.0, 100.0, 1.0));
        let input = Autopilot::default().poll(&state);
        assert!(input.held.right);
        assert!(!input.held.left);
        assert_eq!(input.events, vec![InputEvent::Fire]);
    }

    #[test]
    fn test_dodges_close_threat() {
        let mut state = playing(2);
        state.hostiles.push(Hostile::new(390.0, 420.0, 1.0));
        let input = Autopilot::default().poll(&state);
        // Threat is to the left, so move right
        assert!(input.held.right);
    }

    #[test]
    fn test_waits_on_game_over() {
        let mut state = playing(3);
        state.game_over();
        let mut pilot = Autopilot::new(3);
        assert!(pilot.poll(&state).events.is_empty());
        assert!(pilot.poll(&state).events.is_empty());
        assert_eq!(pilot.poll(&state).events, vec![InputEvent::Confirm]);
    }
}
