//! Keyboard input source
//!
//! Controls:
//! - W / ArrowUp: move up (-Z)
//! - S / ArrowDown: move down (+Z)
//! - A / ArrowLeft: move left (-X)
//! - D / ArrowRight: move right (+X)
//! - Space: jump (held)

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::source::SourceHandle;
use crate::Intent;

/// Map a physical key to the intent it drives
pub fn intent_for_key(key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(Intent::UP),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Intent::DOWN),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Intent::LEFT),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Intent::RIGHT),
        KeyCode::Space => Some(Intent::JUMP),
        _ => None,
    }
}

/// Keyboard source: held keys assert intents until released
#[derive(Clone, Debug)]
pub struct KeyboardSource {
    handle: SourceHandle,
}

impl KeyboardSource {
    pub fn new(handle: SourceHandle) -> Self {
        Self { handle }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a movement or jump key.
    pub fn process_key(&self, key: KeyCode, state: ElementState) -> bool {
        match intent_for_key(key) {
            Some(intent) => {
                self.handle.set(intent, state == ElementState::Pressed);
                true
            }
            None => false,
        }
    }

    /// Release all keys (e.g. when the window loses focus)
    pub fn release_all(&self) {
        self.handle.clear();
    }

    /// Write handle backing this source
    pub fn handle(&self) -> &SourceHandle {
        &self.handle
    }
}
