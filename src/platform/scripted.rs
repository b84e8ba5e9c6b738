//! Prepared input frames, replayed in order

use std::collections::VecDeque;

use super::InputSource;
use crate::sim::{GameState, InputEvent, TickInput};

/// Replays a fixed queue of inputs; idle (or closing) once it runs dry
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
    close_when_done: bool,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            close_when_done: false,
        }
    }

    /// Send a close event once the script is exhausted
    pub fn closing(mut self) -> Self {
        self.close_when_done = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> TickInput {
        match self.frames.pop_front() {
            Some(frame) => frame,
            None if self.close_when_done => TickInput::with_events(&[InputEvent::Close]),
            None => TickInput::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_then_idles() {
        let state = GameState::new(0);
        let mut input = ScriptedInput::new(vec![TickInput::with_events(&[InputEvent::Fire])]);
        assert_eq!(input.poll(&state).events, vec![InputEvent::Fire]);
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.poll(&state), TickInput::default());
    }

    #[test]
    fn test_closing_script() {
        let state = GameState::new(0);
        let mut input = ScriptedInput::new(Vec::new()).closing();
        assert_eq!(input.poll(&state).events, vec![InputEvent::Close]);
    }
}
