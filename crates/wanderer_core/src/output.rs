//! Per-frame output handed to the presentation layer

use wanderer_math::Vec3;
use wanderer_physics::PlayerState;

/// Where the character rig should be drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerTransform {
    pub position: Vec3,
    /// Rotation around +Y in radians
    pub yaw: f32,
}

impl From<&PlayerState> for PlayerTransform {
    fn from(player: &PlayerState) -> Self {
        Self {
            position: player.position,
            yaw: player.facing_yaw,
        }
    }
}

/// Camera eye and look-at point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

/// Everything a renderer needs for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    /// Frame counter since the driver was created
    pub frame: u64,
    /// `None` until the character rig has loaded
    pub player: Option<PlayerTransform>,
    pub camera: CameraPose,
    /// Whether terrain collision is active (otherwise the flat plane is)
    pub terrain_loaded: bool,
}

/// Consumer of frame output
///
/// The frame driver never draws anything itself.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameOutput);
}

/// Sink that keeps every presented frame
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<FrameOutput>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&FrameOutput> {
        self.frames.last()
    }
}

impl FrameSink for RecordingSink {
    fn present(&mut self, frame: &FrameOutput) {
        self.frames.push(*frame);
    }
}
