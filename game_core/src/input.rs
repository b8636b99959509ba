//! Keyboard input handling

use crate::PaddleIntent;

/// What a key press asks of the match outside paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    TogglePause,
}

/// Held movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

fn is_up(key: &str) -> bool {
    key == "ArrowUp" || key.eq_ignore_ascii_case("w")
}

fn is_down(key: &str) -> bool {
    key == "ArrowDown" || key.eq_ignore_ascii_case("s")
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event
    pub fn key_down(&mut self, key: &str) -> KeyAction {
        if is_up(key) {
            self.up = true;
        } else if is_down(key) {
            self.down = true;
        } else if key.eq_ignore_ascii_case("p") {
            return KeyAction::TogglePause;
        }
        KeyAction::None
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) {
        if is_up(key) {
            self.up = false;
        } else if is_down(key) {
            self.down = false;
        }
    }

    pub fn intent(&self) -> PaddleIntent {
        PaddleIntent::from_keys(self.up, self.down)
    }
}
