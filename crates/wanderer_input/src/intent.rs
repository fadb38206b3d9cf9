//! Movement intents and the per-frame input snapshot

use bitflags::bitflags;

bitflags! {
    /// Intents a single input source can assert
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Intent: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const JUMP = 1 << 4;

        const DIRECTIONS = Self::UP.bits() | Self::DOWN.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

/// Aggregated intent for one frame
///
/// Each flag is true if any registered source asserts it. Snapshots are
/// rebuilt from source state every frame and never accumulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub jump_requested: bool,
}

impl InputState {
    /// No intents asserted
    pub const IDLE: Self = Self {
        move_up: false,
        move_down: false,
        move_left: false,
        move_right: false,
        jump_requested: false,
    };

    /// Net movement axes as (right - left, down - up)
    ///
    /// Opposing intents cancel to zero.
    pub fn move_axes(&self) -> (f32, f32) {
        let x = (self.move_right as i32 - self.move_left as i32) as f32;
        let z = (self.move_down as i32 - self.move_up as i32) as f32;
        (x, z)
    }

    /// Check if any directional intent is asserted
    pub fn has_direction(&self) -> bool {
        self.move_up || self.move_down || self.move_left || self.move_right
    }

    /// Builder: request a jump
    pub fn with_jump(mut self) -> Self {
        self.jump_requested = true;
        self
    }
}

impl From<Intent> for InputState {
    fn from(intent: Intent) -> Self {
        Self {
            move_up: intent.contains(Intent::UP),
            move_down: intent.contains(Intent::DOWN),
            move_left: intent.contains(Intent::LEFT),
            move_right: intent.contains(Intent::RIGHT),
            jump_requested: intent.contains(Intent::JUMP),
        }
    }
}
