//! Follow camera
//!
//! The camera trails the player: every frame its position moves a fixed
//! fraction of the remaining distance toward a desired pose derived from the
//! player's transform, while the look-at point tracks the player directly.

use serde::{Deserialize, Serialize};
use wanderer_math::Vec3;
use wanderer_physics::PlayerState;

use crate::output::CameraPose;

/// Lowest accepted smoothing coefficient
const MIN_SMOOTHING: f32 = 0.001;

/// How the follow offset is applied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Offset rotated by the player's yaw, so the camera swings around with
    /// the character
    #[default]
    Chase,
    /// Offset applied in world space
    Fixed,
}

/// Camera rig tuning
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRigConfig {
    pub mode: CameraMode,
    /// Offset from the player to the desired camera position
    pub offset: Vec3,
    /// Look-at point height above the player origin
    pub look_at_height: f32,
    /// Fraction of the remaining distance covered per frame
    pub smoothing: f32,
    /// Pose before the first follow step
    pub initial: CameraPose,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            mode: CameraMode::Chase,
            offset: Vec3::new(0.0, 5.0, 15.0),
            look_at_height: 2.0,
            smoothing: 0.1,
            initial: CameraPose {
                position: Vec3::new(0.0, 10.0, 20.0),
                target: Vec3::ZERO,
            },
        }
    }
}

/// Smoothed follow camera
#[derive(Clone, Debug)]
pub struct CameraRig {
    config: CameraRigConfig,
    pose: CameraPose,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraRigConfig::default())
    }
}

impl CameraRig {
    /// Create a rig at its initial pose
    ///
    /// The smoothing coefficient is clamped into (0, 1] so the camera can
    /// neither freeze nor overshoot.
    pub fn new(mut config: CameraRigConfig) -> Self {
        let clamped = if config.smoothing.is_finite() {
            config.smoothing.clamp(MIN_SMOOTHING, 1.0)
        } else {
            CameraRigConfig::default().smoothing
        };
        if clamped != config.smoothing {
            log::warn!(
                "Camera smoothing {} out of range, using {}",
                config.smoothing,
                clamped
            );
            config.smoothing = clamped;
        }

        let pose = config.initial;
        Self { config, pose }
    }

    pub fn config(&self) -> &CameraRigConfig {
        &self.config
    }

    /// Current camera pose
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Desired pose for a player
    pub fn desired_pose(&self, player: &PlayerState) -> CameraPose {
        let offset = match self.config.mode {
            CameraMode::Chase => self.config.offset.rotate_y(player.facing_yaw),
            CameraMode::Fixed => self.config.offset,
        };
        CameraPose {
            position: player.position + offset,
            target: player.position + Vec3::new(0.0, self.config.look_at_height, 0.0),
        }
    }

    /// Advance one frame toward the player
    pub fn follow(&mut self, player: &PlayerState) -> CameraPose {
        let desired = self.desired_pose(player);
        self.pose.position = self.pose.position.lerp(desired.position, self.config.smoothing);
        self.pose.target = desired.target;
        self.pose
    }
}
